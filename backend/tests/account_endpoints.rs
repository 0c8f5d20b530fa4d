//! End-to-end tests for the account API using the default collaborators.
//!
//! The full application is assembled with `build_app`, so requests pass
//! through the trace middleware, the in-memory user store, argon2 hashing and
//! real HS256 tokens.

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test::{self, TestRequest};
use actix_web::web;
use chrono::Duration;
use crowdfund::domain::TRACE_ID_HEADER;
use crowdfund::inbound::http::health::HealthState;
use crowdfund::server::{AppDependencies, build_app, build_http_state};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn deps() -> AppDependencies {
    let http_state = build_http_state("integration-secret", Duration::hours(1))
        .expect("default collaborators build");
    AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(http_state),
    }
}

async fn send<S, R, B>(app: &S, request: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(app, request).await;
    let status = response.status();
    assert!(
        response.headers().contains_key(TRACE_ID_HEADER),
        "trace middleware sets the trace id header"
    );
    let body = test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("envelope is JSON");
    (status, value)
}

fn register(email: &str) -> TestRequest {
    TestRequest::post().uri("/api/v1/register").set_json(json!({
        "name": "Alice",
        "email": email,
        "occupation": "engineer",
        "password": "secret1"
    }))
}

#[rstest]
#[actix_rt::test]
async fn register_login_and_fetch_round_trip(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;

    let (status, registered) = send(&app, register("alice@example.com").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(registered["meta"]["message"], "Account successfully registered");
    let user_id = registered["data"]["id"].as_str().expect("id").to_owned();
    assert!(!registered["data"]["token"].as_str().expect("token").is_empty());

    let login = TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "email": "Alice@Example.com", "password": "secret1" }));
    let (status, logged_in) = send(&app, login.to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logged_in["meta"]["message"], "Login successfully");
    assert_eq!(logged_in["data"]["id"], user_id.as_str());
    let token = logged_in["data"]["token"].as_str().expect("token").to_owned();

    let fetch = TestRequest::get()
        .uri("/api/v1/users/fetch")
        .insert_header((AUTHORIZATION, format!("Bearer {token}")));
    let (status, fetched) = send(&app, fetch.to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fetched,
        json!({
            "meta": {
                "code": 200,
                "message": "Successfully fetch user data",
                "status": "success"
            },
            "data": {
                "id": user_id,
                "name": "Alice",
                "occupation": "engineer",
                "email": "alice@example.com",
                "token": "",
                "image_url": ""
            }
        })
    );
}

#[rstest]
#[actix_rt::test]
async fn registering_twice_uses_generic_failure(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;

    let (first, _) = send(&app, register("bob@example.com").to_request()).await;
    assert_eq!(first, StatusCode::OK);

    let (status, body) = send(&app, register("BOB@example.com").to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "meta": { "code": 422, "message": "Register Failed!", "status": "error" },
            "data": null
        })
    );
}

#[rstest]
#[actix_rt::test]
async fn wrong_password_is_reported_on_login(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;
    send(&app, register("carol@example.com").to_request()).await;

    let login = TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "email": "carol@example.com", "password": "not-it" }));
    let (status, body) = send(&app, login.to_request()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["meta"]["message"], "Login Failed!");
    assert_eq!(body["data"], json!({ "errors": "wrong password" }));
}

#[rstest]
#[actix_rt::test]
async fn email_check_tracks_registrations(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;
    let check = || {
        TestRequest::post()
            .uri("/api/v1/email_checkers")
            .set_json(json!({ "email": "dave@example.com" }))
            .to_request()
    };

    let (_, before) = send(&app, check()).await;
    assert_eq!(before["data"]["is_available"], true);
    assert_eq!(before["meta"]["message"], "Email is available");

    send(&app, register("dave@example.com").to_request()).await;

    let (_, after) = send(&app, check()).await;
    assert_eq!(after["data"]["is_available"], false);
    assert_eq!(after["meta"]["message"], "Email has been registered");
}

#[rstest]
#[actix_rt::test]
async fn fetch_rejects_forged_token(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;

    let other_signer = build_http_state("some-other-secret", Duration::hours(1))
        .expect("default collaborators build");
    let (_, registered) = {
        let other_app = test::init_service(build_app(AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(other_signer),
        }))
        .await;
        send(&other_app, register("eve@example.com").to_request()).await
    };
    let forged = registered["data"]["token"].as_str().expect("token").to_owned();

    let fetch = TestRequest::get()
        .uri("/api/v1/users/fetch")
        .insert_header((AUTHORIZATION, format!("Bearer {forged}")));
    let (status, body) = send(&app, fetch.to_request()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["meta"]["message"], "Unauthorized");
    assert_eq!(body["data"], Value::Null);
}
