//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CROWDFUND_*` environment variables or an
//! optional configuration file.

use std::net::SocketAddr;

use chrono::Duration;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 24 * 60;

/// Secret used only by debug builds started without `CROWDFUND_TOKEN_SECRET`.
pub const DEVELOPMENT_TOKEN_SECRET: &str = "crowdfund-development-secret";

/// Settings that parsed but cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The token lifetime does not fit in a duration.
    #[error("token lifetime of {minutes} minutes is out of range")]
    TokenTtlOutOfRange { minutes: i64 },
}

/// Configuration values controlling the HTTP listener and token signing.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CROWDFUND")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// HS256 signing secret for bearer tokens.
    pub token_secret: Option<String>,
    /// Token lifetime in minutes.
    pub token_ttl_minutes: Option<i64>,
}

impl AppSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host(), self.port).parse()
    }

    /// Configured signing secret, if any non-blank value was provided.
    pub fn token_secret(&self) -> Option<&str> {
        self.token_secret
            .as_deref()
            .filter(|secret| !secret.trim().is_empty())
    }

    /// Lifetime applied to issued tokens.
    ///
    /// # Errors
    /// Returns [`SettingsError::TokenTtlOutOfRange`] when the configured
    /// minutes overflow a duration.
    pub fn token_ttl(&self) -> Result<Duration, SettingsError> {
        let minutes = self.token_ttl_minutes.unwrap_or(DEFAULT_TOKEN_TTL_MINUTES);
        Duration::try_minutes(minutes).ok_or(SettingsError::TokenTtlOutOfRange { minutes })
    }
}
