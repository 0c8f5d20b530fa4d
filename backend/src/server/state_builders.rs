//! Builders wiring the default collaborators into HTTP state.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::AccountService;
use crate::inbound::http::state::HttpState;
use crate::outbound::{InMemoryUserRepository, JwtAuthService, TokenError};

/// Build HTTP state backed by an in-memory user store and HS256 tokens.
///
/// # Errors
/// Returns [`TokenError`] when the secret is blank or `ttl` is not positive
/// or pushes expiry past the representable date range.
///
/// # Examples
/// ```
/// use chrono::Duration;
/// use crowdfund::server::build_http_state;
///
/// let state = build_http_state("secret", Duration::hours(1)).unwrap();
/// let _users = state.user_service.clone();
/// ```
pub fn build_http_state(token_secret: &str, ttl: Duration) -> Result<HttpState, TokenError> {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(AccountService::new(repository));
    let auth_service = Arc::new(JwtAuthService::new(token_secret, ttl)?);
    Ok(HttpState::new(user_service, auth_service))
}
