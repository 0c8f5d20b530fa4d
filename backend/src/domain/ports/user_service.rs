//! Driving port for account use-cases.
//!
//! HTTP handlers call this port to register, authenticate and look up users
//! without knowing how accounts are stored or how passwords are checked.
//! Handler tests substitute a mock instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Error, LoginInput, RegisterUserInput, User, UserId};

/// Domain use-case port for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create an account from a validated registration request.
    async fn register_user(&self, input: RegisterUserInput) -> Result<User, Error>;

    /// Check credentials and return the matching user.
    async fn login(&self, input: LoginInput) -> Result<User, Error>;

    /// Whether no account uses `email` yet.
    async fn is_email_available(&self, email: &EmailAddress) -> Result<bool, Error>;

    /// Fetch an existing user.
    async fn get_user_by_id(&self, id: &UserId) -> Result<User, Error>;
}
