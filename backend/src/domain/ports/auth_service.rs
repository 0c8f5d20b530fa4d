//! Driving port for bearer token issuance and verification.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Error, UserId};

/// Opaque bearer token handed to clients.
///
/// Handlers embed it verbatim in responses and never inspect its contents.
#[derive(Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wrap an issued token string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Placeholder used when a view is rendered without issuing a token.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("Token(\"\")")
        } else {
            f.write_str("Token(<redacted>)")
        }
    }
}

/// Domain use-case port for authentication tokens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Issue a token identifying `user_id`.
    async fn generate_token(&self, user_id: &UserId) -> Result<Token, Error>;

    /// Verify a token and return the user it identifies.
    async fn validate_token(&self, token: &str) -> Result<UserId, Error>;
}
