//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: account endpoints and health probes from the inbound layer
//! - **Schemas**: request bodies, the user view and the envelope wrappers
//!   from [`crate::inbound::http::schemas`]
//! - **Security**: bearer token scheme used by `GET /api/v1/users/fetch`
//!
//! The generated specification is served by Swagger UI in debug builds.

use crate::inbound::http::envelope::{Meta, Outcome};
use crate::inbound::http::formatter::UserView;
use crate::inbound::http::schemas::{
    EmailAvailabilityEnvelopeSchema, EmailAvailabilitySchema, ErrorEnvelopeSchema,
    UserEnvelopeSchema, ValidationEnvelopeSchema, ValidationErrorsSchema,
};
use crate::inbound::http::users::{CheckEmailRequest, LoginRequest, RegisterUserRequest};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "Token issued by POST /api/v1/register or POST /api/v1/login.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Crowdfund backend API",
        description = "Account registration, login and bearer-token access for the crowdfunding backend."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::login,
        crate::inbound::http::users::check_email_availability,
        crate::inbound::http::users::fetch_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterUserRequest,
        LoginRequest,
        CheckEmailRequest,
        UserView,
        Meta,
        Outcome,
        UserEnvelopeSchema,
        ValidationErrorsSchema,
        ValidationEnvelopeSchema,
        ErrorEnvelopeSchema,
        EmailAvailabilitySchema,
        EmailAvailabilityEnvelopeSchema,
    )),
    tags(
        (name = "users", description = "Account registration, login and lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
