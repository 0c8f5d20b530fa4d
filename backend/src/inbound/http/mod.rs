//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod envelope;
pub mod formatter;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

pub use envelope::{ApiResponse, Meta, Outcome};
