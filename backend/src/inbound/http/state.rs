//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AuthService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub user_service: Arc<dyn UserService>,
    pub auth_service: Arc<dyn AuthService>,
}

impl HttpState {
    /// Construct state from the account and token ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use chrono::Duration;
    /// use crowdfund::domain::AccountService;
    /// use crowdfund::inbound::http::state::HttpState;
    /// use crowdfund::outbound::{InMemoryUserRepository, JwtAuthService};
    ///
    /// let users = Arc::new(AccountService::new(Arc::new(InMemoryUserRepository::new())));
    /// let tokens = Arc::new(JwtAuthService::new("secret", Duration::hours(1)).unwrap());
    /// let state = HttpState::new(users, tokens);
    /// let _service = state.user_service.clone();
    /// ```
    pub fn new(user_service: Arc<dyn UserService>, auth_service: Arc<dyn AuthService>) -> Self {
        Self {
            user_service,
            auth_service,
        }
    }
}
