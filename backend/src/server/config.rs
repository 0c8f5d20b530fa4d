//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use chrono::Duration;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) token_secret: String,
    pub(crate) token_ttl: Duration,
}

impl ServerConfig {
    /// Construct a server configuration for `bind_addr` signing tokens with
    /// `token_secret`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, token_secret: impl Into<String>) -> Self {
        Self {
            bind_addr,
            token_secret: token_secret.into(),
            token_ttl: Duration::hours(24),
        }
    }

    /// Override the lifetime of issued tokens.
    #[must_use]
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the lifetime of issued tokens.
    #[must_use]
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_defaults_to_one_day_and_can_be_overridden() {
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("literal address");
        let config = ServerConfig::new(addr, "secret");
        assert_eq!(config.token_ttl(), Duration::hours(24));
        assert_eq!(config.bind_addr(), addr);

        let config = config.with_token_ttl(Duration::minutes(5));
        assert_eq!(config.token_ttl(), Duration::minutes(5));
    }
}
