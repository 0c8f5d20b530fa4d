//! OpenAPI schema definitions for response envelopes.
//!
//! [`crate::inbound::http::envelope::ApiResponse`] is generic over its
//! payload and serialised with `serde_json::Value` for failures, which utoipa
//! cannot describe precisely. These wrappers document each concrete envelope
//! an endpoint can return; they are never constructed at runtime.

use utoipa::ToSchema;

use crate::inbound::http::envelope::Meta;
use crate::inbound::http::formatter::UserView;

/// Envelope carrying a formatted account.
#[derive(ToSchema)]
#[schema(as = UserEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelopeSchema {
    meta: Meta,
    data: UserView,
}

/// Per-field validation messages keyed by field name.
#[derive(ToSchema)]
#[schema(as = ValidationErrors)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationErrorsSchema {
    /// Field name to message, for example `{"email": "email is required"}`.
    #[schema(value_type = Object)]
    errors: serde_json::Value,
}

/// Envelope returned when the request body fails validation.
#[derive(ToSchema)]
#[schema(as = ValidationEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationEnvelopeSchema {
    meta: Meta,
    data: ValidationErrorsSchema,
}

/// Envelope returned for failures without field detail.
///
/// `data` is `null`, or `{"errors": "<message>"}` for a rejected login.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    meta: Meta,
    #[schema(value_type = Option<Object>)]
    data: Option<serde_json::Value>,
}

/// Availability flag for an email address.
#[derive(ToSchema)]
#[schema(as = EmailAvailability)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmailAvailabilitySchema {
    /// `true` when no account uses the address.
    is_available: bool,
}

/// Envelope carrying an email availability result.
#[derive(ToSchema)]
#[schema(as = EmailAvailabilityEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmailAvailabilityEnvelopeSchema {
    meta: Meta,
    data: EmailAvailabilitySchema,
}
