//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local `UserRepository`.
//! - **token**: HS256 JWT `AuthService`.
//!
//! Adapters translate between domain types and infrastructure representations
//! and contain no business logic.

pub mod memory;
pub mod token;

pub use memory::InMemoryUserRepository;
pub use token::{JwtAuthService, TokenError};
