//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_service;
mod user_repository;
mod user_service;

#[cfg(test)]
pub use auth_service::MockAuthService;
pub use auth_service::{AuthService, Token};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::UserService;
