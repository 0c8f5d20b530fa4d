//! Domain primitives, use-case ports and services.
//!
//! Purpose: define the strongly typed account values handled by the HTTP
//! layer and the ports it calls. Keep types immutable and document their
//! invariants in each type's Rustdoc.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: collaborator failures.
//! - `RegisterUserInput`, `LoginInput`, `CheckEmailInput`: validated inputs.
//! - `FieldError` / `FieldErrors`: per-field validation failures.
//! - `User`, `UserId`, `EmailAddress`: account model.
//! - `AccountService`: default `UserService` implementation.
//! - `TraceId`: request correlation id.

pub mod account_service;
pub mod auth;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::account_service::AccountService;
pub use self::auth::{CheckEmailInput, LoginInput, PASSWORD_MIN_LENGTH, RegisterUserInput};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{DEFAULT_ROLE, EmailAddress, User, UserId, UserValidationError};
pub use self::validation::{BODY_FIELD, FieldError, FieldErrors};
