//! Uniform JSON response envelope.
//!
//! Every account endpoint answers with:
//!
//! ```text
//! { "meta": { "code": 200, "message": "...", "status": "success" }, "data": ... }
//! ```
//!
//! `meta.code` normally matches the HTTP status, but [`ApiResponse::reply_with`]
//! lets a handler put a different status on the wire.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Outcome literal carried in `meta.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The operation completed.
    Success,
    /// The operation failed; `data` may explain why.
    Error,
}

/// Envelope metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    /// HTTP status code as reported in the body.
    #[schema(example = 200)]
    pub code: u16,
    /// Human-readable summary.
    #[schema(example = "Account successfully registered")]
    pub message: String,
    /// `"success"` or `"error"`.
    pub status: Outcome,
}

/// Response envelope wrapping `data`.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use crowdfund::inbound::http::envelope::{ApiResponse, Outcome};
/// use serde_json::json;
///
/// let response = ApiResponse::new(StatusCode::OK, "ok", Outcome::Success, json!({"a": 1}));
/// let body = serde_json::to_value(&response).unwrap();
/// assert_eq!(body["meta"]["code"], 200);
/// assert_eq!(body["meta"]["status"], "success");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    /// Code, message and outcome.
    pub meta: Meta,
    /// Payload; serialised as `null` when absent.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Build an envelope whose embedded code is `code`.
    pub fn new(code: StatusCode, message: impl Into<String>, status: Outcome, data: T) -> Self {
        Self {
            meta: Meta {
                code: code.as_u16(),
                message: message.into(),
                status,
            },
            data,
        }
    }

    /// Successful envelope with HTTP 200.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message, Outcome::Success, data)
    }

    /// Serialise with the embedded code as the HTTP status.
    pub fn reply(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.meta.code).unwrap_or(StatusCode::OK);
        self.reply_with(status)
    }

    /// Serialise with an explicit HTTP status, leaving `meta.code` untouched.
    pub fn reply_with(self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

impl ApiResponse<Value> {
    /// Failed envelope carrying `data`.
    pub fn error(code: StatusCode, message: impl Into<String>, data: Value) -> Self {
        Self::new(code, message, Outcome::Error, data)
    }
}
