//! Bearer token authentication for protected account endpoints.
//!
//! [`CurrentUser`] resolves the `Authorization: Bearer <token>` header to a
//! stored account before the handler runs. Every failure becomes the same
//! `401 Unauthorized` envelope so clients cannot tell a bad token from a
//! deleted account.

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use serde_json::Value;
use tracing::{debug, error};

use crate::domain::User;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::state::HttpState;

const BEARER_PREFIX: &str = "Bearer ";
const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Rejection raised when a request cannot be tied to an account.
///
/// The reason only appears in the `Display` text actix logs; clients see the
/// generic envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request rejected: {reason}")]
pub struct AuthRejection {
    reason: String,
}

impl AuthRejection {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ResponseError for AuthRejection {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        ApiResponse::error(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE, Value::Null).reply()
    }
}

/// Extract the raw token from an `Authorization` header value.
///
/// # Examples
/// ```
/// use crowdfund::inbound::http::auth::bearer_token;
///
/// assert_eq!(bearer_token("Bearer abc"), Some("abc"));
/// assert_eq!(bearer_token("Basic abc"), None);
/// assert_eq!(bearer_token("Bearer "), None);
/// ```
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// The account identified by the request's bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// Unwrap the resolved account.
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Box::pin(async move {
            let Some(state) = state else {
                error!("HttpState missing from app data");
                return Err(actix_web::error::ErrorInternalServerError(
                    "server misconfigured",
                ));
            };
            let header = header.ok_or_else(|| AuthRejection::new("missing authorization"))?;
            let token = bearer_token(&header)
                .ok_or_else(|| AuthRejection::new("authorization is not a bearer token"))?;

            let user_id = state.auth_service.validate_token(token).await.map_err(|err| {
                debug!(error = %err, "bearer token rejected");
                AuthRejection::new(err.message())
            })?;
            let user = state
                .user_service
                .get_user_by_id(&user_id)
                .await
                .map_err(|err| {
                    debug!(error = %err, %user_id, "token subject could not be loaded");
                    AuthRejection::new(err.message())
                })?;
            Ok(Self(user))
        })
    }
}
