//! Process-local `UserRepository` adapter.
//!
//! Accounts live for the lifetime of the process. Email uniqueness is checked
//! and enforced under the same write lock, so concurrent registrations for one
//! address cannot both succeed.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, User, UserId};

#[derive(Default)]
struct Store {
    by_id: HashMap<UserId, User>,
    id_by_email: HashMap<EmailAddress, UserId>,
}

/// Thread-safe in-memory user store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> UserPersistenceError {
    UserPersistenceError::query("user store lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut store = self.store.write().map_err(poisoned)?;
        if store.id_by_email.contains_key(&user.email) {
            return Err(UserPersistenceError::duplicate_email(user.email.as_ref()));
        }
        store
            .id_by_email
            .insert(user.email.clone(), user.id.clone());
        store.by_id.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store
            .id_by_email
            .get(email)
            .and_then(|id| store.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store.by_id.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::Utc;
    use rstest::{fixture, rstest};

    #[fixture]
    fn user() -> User {
        let email = EmailAddress::new("a@x.com").expect("valid email");
        User::new("Alice", "eng", email, "hash", Utc::now())
    }

    #[rstest]
    #[tokio::test]
    async fn stored_user_is_found_by_email_and_id(user: User) {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user).await.expect("insert");

        let by_email = repo.find_by_email(&user.email).await.expect("lookup");
        let by_id = repo.find_by_id(&user.id).await.expect("lookup");
        assert_eq!(by_email.as_ref(), Some(&user));
        assert_eq!(by_id.as_ref(), Some(&user));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_users_are_none(user: User) {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_by_email(&user.email).await.expect("lookup").is_none());
        assert!(repo.find_by_id(&user.id).await.expect("lookup").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_email_is_rejected(user: User) {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user).await.expect("first insert");

        let same_email = EmailAddress::new("A@X.com").expect("valid email");
        let other = User::new("Bob", "ops", same_email, "hash", Utc::now());
        let err = repo.insert(&other).await.expect_err("duplicate must fail");
        assert_eq!(err, UserPersistenceError::duplicate_email("a@x.com"));
        assert!(repo.find_by_id(&other.id).await.expect("lookup").is_none());
    }
}
