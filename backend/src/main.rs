//! Backend entry-point: loads settings, wires the account API and starts the server.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use crowdfund::inbound::http::health::HealthState;
use crowdfund::server::{ServerConfig, create_server, drain_on, shutdown_signal};
use crowdfund::settings::{AppSettings, DEVELOPMENT_TOKEN_SECRET};

/// Resolve the token secret, allowing a fixed development secret in debug builds.
fn token_secret(settings: &AppSettings) -> std::io::Result<String> {
    match settings.token_secret() {
        Some(secret) => Ok(secret.to_owned()),
        None if cfg!(debug_assertions) => {
            warn!("CROWDFUND_TOKEN_SECRET not set; using development secret");
            Ok(DEVELOPMENT_TOKEN_SECRET.to_owned())
        }
        None => Err(std::io::Error::other(
            "CROWDFUND_TOKEN_SECRET must be set in release builds",
        )),
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| std::io::Error::other(format!("invalid bind address: {err}")))?;
    let token_ttl = settings
        .token_ttl()
        .map_err(|err| std::io::Error::other(format!("invalid token lifetime: {err}")))?;
    let config = ServerConfig::new(bind_addr, token_secret(&settings)?).with_token_ttl(token_ttl);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    info!(%bind_addr, "listening");
    server.await
}
