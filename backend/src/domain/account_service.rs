//! Default [`UserService`] backed by a [`UserRepository`] and argon2id.
//!
//! Passwords are stored as PHC strings, so the salt and parameters travel
//! with each hash and verification needs nothing else. Argon2 work runs on
//! the blocking pool to keep request workers responsive.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, info};
use zeroize::Zeroizing;

use crate::domain::ports::{UserPersistenceError, UserRepository, UserService};
use crate::domain::{EmailAddress, Error, LoginInput, RegisterUserInput, User, UserId};

const DUPLICATE_EMAIL_MESSAGE: &str = "email has already been registered";
const UNKNOWN_EMAIL_MESSAGE: &str = "no user found on that email";
const WRONG_PASSWORD_MESSAGE: &str = "wrong password";
const UNKNOWN_ID_MESSAGE: &str = "no user found on that id";

/// Account use-cases over an injected repository.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
}

impl AccountService {
    /// Create a service storing accounts in `users`.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

pub(crate) fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            error!(error = %err, "password hashing failed");
            Error::internal("failed to hash password")
        })
}

pub(crate) fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(hash).map_err(|err| {
        error!(error = %err, "stored password hash is not a valid PHC string");
        Error::internal("stored password hash is invalid")
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Run argon2 work on tokio's blocking pool.
async fn run_blocking<T, F>(work: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|err| {
        error!(error = %err, "password task panicked");
        Error::internal("password processing failed")
    })?
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::DuplicateEmail { .. } => Error::conflict(DUPLICATE_EMAIL_MESSAGE),
        UserPersistenceError::Query { message } => {
            error!(%message, "user repository query failed");
            Error::internal("user repository query failed")
        }
    }
}

#[async_trait]
impl UserService for AccountService {
    async fn register_user(&self, input: RegisterUserInput) -> Result<User, Error> {
        let existing = self
            .users
            .find_by_email(input.email())
            .await
            .map_err(map_persistence_error)?;
        if existing.is_some() {
            debug!(email = %input.email(), "registration rejected: email taken");
            return Err(Error::conflict(DUPLICATE_EMAIL_MESSAGE));
        }

        let password = Zeroizing::new(input.password().to_owned());
        let password_hash = run_blocking(move || hash_password(&password)).await?;
        let user = User::new(
            input.name(),
            input.occupation(),
            input.email().clone(),
            password_hash,
            Utc::now(),
        );
        self.users
            .insert(&user)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    async fn login(&self, input: LoginInput) -> Result<User, Error> {
        // A malformed address cannot belong to any account.
        let Ok(email) = EmailAddress::new(input.email()) else {
            return Err(Error::unauthorized(UNKNOWN_EMAIL_MESSAGE));
        };
        let user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::unauthorized(UNKNOWN_EMAIL_MESSAGE))?;

        let password = Zeroizing::new(input.password().to_owned());
        let stored_hash = user.password_hash.clone();
        if !run_blocking(move || verify_password(&password, &stored_hash)).await? {
            debug!(user_id = %user.id, "login rejected: wrong password");
            return Err(Error::unauthorized(WRONG_PASSWORD_MESSAGE));
        }
        Ok(user)
    }

    async fn is_email_available(&self, email: &EmailAddress) -> Result<bool, Error> {
        let existing = self
            .users
            .find_by_email(email)
            .await
            .map_err(map_persistence_error)?;
        Ok(existing.is_none())
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(UNKNOWN_ID_MESSAGE))
    }
}
