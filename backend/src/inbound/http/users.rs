//! Account API handlers.
//!
//! ```text
//! POST /api/v1/register {"name":"Alice","email":"a@x.com","occupation":"eng","password":"secret1"}
//! POST /api/v1/login {"email":"a@x.com","password":"secret1"}
//! POST /api/v1/email_checkers {"email":"a@x.com"}
//! GET /api/v1/users/fetch  (Authorization: Bearer <token>)
//! ```
//!
//! Each handler decodes its body, calls at most one service operation plus
//! token issuance, and answers with exactly one envelope. Failures never
//! escape to actix as errors.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::field::{DisplayValue, display};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::domain::ports::Token;
use crate::domain::{CheckEmailInput, FieldErrors, LoginInput, RegisterUserInput, TraceId};
use crate::inbound::http::auth::CurrentUser;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::formatter::{format_user, format_validation_error};
use crate::inbound::http::state::HttpState;

const REGISTER_FAILED: &str = "Register Failed!";
const REGISTERED: &str = "Account successfully registered";
const LOGIN_FAILED: &str = "Login Failed!";
const LOGGED_IN: &str = "Login successfully";
const EMAIL_CHECK_FAILED: &str = "Email checking failed";
const EMAIL_AVAILABLE: &str = "Email is available";
const EMAIL_TAKEN: &str = "Email has been registered";
const USER_FETCHED: &str = "Successfully fetch user data";

/// Registration body for `POST /api/v1/register`.
///
/// Fields are optional at the decoding stage so every missing field can be
/// reported, not only the first.
#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Alice")]
    pub name: Option<String>,
    #[schema(example = "engineer")]
    pub occupation: Option<String>,
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[schema(example = "secret1")]
    pub password: Option<String>,
}

impl TryFrom<RegisterUserRequest> for RegisterUserInput {
    type Error = FieldErrors;

    fn try_from(value: RegisterUserRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.name.as_deref(),
            value.email.as_deref(),
            value.occupation.as_deref(),
            value.password.as_deref(),
        )
    }
}

/// Login body for `POST /api/v1/login`.
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[schema(example = "secret1")]
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for LoginInput {
    type Error = FieldErrors;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.email.as_deref(), value.password.as_deref())
    }
}

/// Body for `POST /api/v1/email_checkers`.
#[derive(Deserialize, ToSchema)]
pub struct CheckEmailRequest {
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
}

impl TryFrom<CheckEmailRequest> for CheckEmailInput {
    type Error = FieldErrors;

    fn try_from(value: CheckEmailRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.email.as_deref())
    }
}

/// Decode a JSON body and validate it into a domain input.
///
/// A body that could not be decoded at all is reported under the `body` field.
fn decode<R, I>(payload: Result<web::Json<R>, actix_web::Error>) -> Result<I, FieldErrors>
where
    I: TryFrom<R, Error = FieldErrors>,
{
    let request = payload.map_err(|err| FieldErrors::malformed_body(err.to_string()))?;
    I::try_from(request.into_inner())
}

/// Trace id of the current request, recorded on failure logs when present.
fn trace_id() -> Option<DisplayValue<TraceId>> {
    TraceId::current().map(display)
}

fn validation_failure(message: &str, errors: &FieldErrors) -> HttpResponse {
    ApiResponse::error(
        StatusCode::UNPROCESSABLE_ENTITY,
        message,
        json!({ "errors": format_validation_error(errors) }),
    )
    .reply()
}

/// Registration failure after validation passed.
///
/// Clients of this endpoint rely on the HTTP status being 400 while
/// `meta.code` reads 422, and on the service's reason being withheld. Login
/// reports its reason instead. Keep both behaviours until clients migrate.
fn registration_rejected() -> HttpResponse {
    ApiResponse::error(StatusCode::UNPROCESSABLE_ENTITY, REGISTER_FAILED, Value::Null)
        .reply_with(StatusCode::BAD_REQUEST)
}

/// Register a new account and issue its first token.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "Account registered", body = crate::inbound::http::schemas::UserEnvelopeSchema),
        (status = 400, description = "Registration rejected; meta.code is 422", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 422, description = "Invalid request body", body = crate::inbound::http::schemas::ValidationEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser",
    security([])
)]
#[post("/register")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: Result<web::Json<RegisterUserRequest>, actix_web::Error>,
) -> HttpResponse {
    let input: RegisterUserInput = match decode(payload) {
        Ok(input) => input,
        Err(errors) => return validation_failure(REGISTER_FAILED, &errors),
    };

    let user = match state.user_service.register_user(input).await {
        Ok(user) => user,
        Err(err) => {
            warn!(
                error = %err,
                code = ?err.code(),
                trace_id = trace_id(),
                "registration rejected by user service"
            );
            return registration_rejected();
        }
    };

    let token = match state.auth_service.generate_token(&user.id).await {
        Ok(token) => token,
        Err(err) => {
            error!(
                error = %err,
                user_id = %user.id,
                trace_id = trace_id(),
                "token issuance failed after registration"
            );
            return registration_rejected();
        }
    };

    info!(user_id = %user.id, "account registered");
    ApiResponse::success(REGISTERED, format_user(&user, token)).reply()
}

/// Authenticate with email and password and issue a token.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = crate::inbound::http::schemas::UserEnvelopeSchema),
        (status = 400, description = "Token could not be issued", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 422, description = "Invalid body or credentials", body = crate::inbound::http::schemas::ValidationEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: Result<web::Json<LoginRequest>, actix_web::Error>,
) -> HttpResponse {
    let input: LoginInput = match decode(payload) {
        Ok(input) => input,
        Err(errors) => return validation_failure(LOGIN_FAILED, &errors),
    };

    let user = match state.user_service.login(input).await {
        Ok(user) => user,
        Err(err) => {
            warn!(code = ?err.code(), trace_id = trace_id(), "login rejected by user service");
            return ApiResponse::error(
                StatusCode::UNPROCESSABLE_ENTITY,
                LOGIN_FAILED,
                json!({ "errors": err.message() }),
            )
            .reply();
        }
    };

    let token = match state.auth_service.generate_token(&user.id).await {
        Ok(token) => token,
        Err(err) => {
            error!(
                error = %err,
                user_id = %user.id,
                trace_id = trace_id(),
                "token issuance failed after login"
            );
            return ApiResponse::error(StatusCode::BAD_REQUEST, LOGIN_FAILED, Value::Null).reply();
        }
    };

    info!(user_id = %user.id, "user logged in");
    ApiResponse::success(LOGGED_IN, format_user(&user, token)).reply()
}

/// Report whether an email address is still free to register.
#[utoipa::path(
    post,
    path = "/api/v1/email_checkers",
    request_body = CheckEmailRequest,
    responses(
        (status = 200, description = "Availability result", body = crate::inbound::http::schemas::EmailAvailabilityEnvelopeSchema),
        (status = 422, description = "Invalid body or lookup failure", body = crate::inbound::http::schemas::ValidationEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "checkEmailAvailability",
    security([])
)]
#[post("/email_checkers")]
pub async fn check_email_availability(
    state: web::Data<HttpState>,
    payload: Result<web::Json<CheckEmailRequest>, actix_web::Error>,
) -> HttpResponse {
    let input: CheckEmailInput = match decode(payload) {
        Ok(input) => input,
        Err(errors) => return validation_failure(EMAIL_CHECK_FAILED, &errors),
    };

    match state.user_service.is_email_available(input.email()).await {
        Ok(is_available) => {
            let message = if is_available {
                EMAIL_AVAILABLE
            } else {
                EMAIL_TAKEN
            };
            ApiResponse::success(message, json!({ "is_available": is_available })).reply()
        }
        Err(err) => {
            error!(error = %err, trace_id = trace_id(), "email availability lookup failed");
            ApiResponse::error(
                StatusCode::UNPROCESSABLE_ENTITY,
                EMAIL_CHECK_FAILED,
                json!({ "errors": "Server error" }),
            )
            .reply()
        }
    }
}

/// Return the account behind the bearer token.
#[utoipa::path(
    get,
    path = "/api/v1/users/fetch",
    responses(
        (status = 200, description = "Current account; token is empty", body = crate::inbound::http::schemas::UserEnvelopeSchema),
        (status = 401, description = "Missing or invalid bearer token", body = crate::inbound::http::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "fetchUser",
    security(("BearerToken" = []))
)]
#[get("/users/fetch")]
pub async fn fetch_user(user: CurrentUser) -> HttpResponse {
    let user = user.into_inner();
    ApiResponse::success(USER_FETCHED, format_user(&user, Token::empty())).reply()
}
