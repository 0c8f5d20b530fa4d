//! HS256 JWT implementation of the `AuthService` port.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::ports::{AuthService, Token, define_port_error};
use crate::domain::{Error, UserId};

define_port_error! {
    /// Failures raised while configuring or using the token signer.
    pub enum TokenError {
        /// The signing secret was blank.
        EmptySecret => "token secret must not be empty",
        /// The token lifetime was zero or negative.
        NonPositiveTtl => "token lifetime must be positive",
        /// The expiry would fall outside the representable date range.
        TtlOutOfRange => "token lifetime is out of range",
        /// Signing the claims failed.
        Encode { message: String } => "failed to sign token: {message}",
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user_id: String,
    iat: i64,
    exp: i64,
}

/// Signs and verifies bearer tokens with a shared secret.
#[derive(Clone)]
pub struct JwtAuthService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtAuthService {
    /// Build a signer for `secret` issuing tokens valid for `ttl`.
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, TokenError> {
        if secret.trim().is_empty() {
            return Err(TokenError::empty_secret());
        }
        if ttl <= Duration::zero() {
            return Err(TokenError::non_positive_ttl());
        }
        if Utc::now().checked_add_signed(ttl).is_none() {
            return Err(TokenError::ttl_out_of_range());
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    fn issue_at(&self, user_id: &UserId, now: DateTime<Utc>) -> Result<Token, TokenError> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(TokenError::ttl_out_of_range)?;
        let claims = Claims {
            user_id: user_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map(Token::new)
            .map_err(|err| TokenError::encode(err.to_string()))
    }
}

#[async_trait]
impl AuthService for JwtAuthService {
    async fn generate_token(&self, user_id: &UserId) -> Result<Token, Error> {
        self.issue_at(user_id, Utc::now()).map_err(|err| {
            error!(error = %err, %user_id, "token generation failed");
            Error::internal("failed to generate token")
        })
    }

    async fn validate_token(&self, token: &str) -> Result<UserId, Error> {
        let validation = Validation::new(Algorithm::HS256);
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation).map_err(
            |err| {
                debug!(error = %err, "token rejected");
                Error::unauthorized("invalid token")
            },
        )?;
        UserId::new(&data.claims.user_id).map_err(|err| {
            debug!(error = %err, "token carries a malformed user id");
            Error::unauthorized("invalid token")
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::{fixture, rstest};

    #[fixture]
    fn service() -> JwtAuthService {
        JwtAuthService::new("test-secret", Duration::hours(1)).expect("valid config")
    }

    #[rstest]
    #[case("", TokenError::EmptySecret)]
    #[case("   ", TokenError::EmptySecret)]
    fn blank_secret_is_rejected(#[case] secret: &str, #[case] expected: TokenError) {
        let result = JwtAuthService::new(secret, Duration::hours(1));
        assert!(matches!(result, Err(err) if err == expected));
    }

    #[rstest]
    fn non_positive_ttl_is_rejected() {
        let result = JwtAuthService::new("secret", Duration::zero());
        assert!(matches!(result, Err(TokenError::NonPositiveTtl)));
    }

    #[rstest]
    #[case(Duration::minutes(1_000_000_000_000))]
    #[case(Duration::MAX)]
    fn unrepresentable_ttl_is_rejected(#[case] ttl: Duration) {
        let result = JwtAuthService::new("secret", ttl);
        assert!(matches!(result, Err(TokenError::TtlOutOfRange)));
    }

    #[rstest]
    fn expiry_overflow_is_an_error(service: JwtAuthService) {
        let result = service.issue_at(&UserId::random(), DateTime::<Utc>::MAX_UTC);
        assert!(matches!(result, Err(TokenError::TtlOutOfRange)));
    }

    #[rstest]
    #[tokio::test]
    async fn generated_token_validates_to_same_user(service: JwtAuthService) {
        let user_id = UserId::random();
        let token = service.generate_token(&user_id).await.expect("token");
        assert!(!token.as_ref().is_empty());
        let decoded = service.validate_token(token.as_ref()).await.expect("valid");
        assert_eq!(decoded, user_id);
    }

    #[rstest]
    #[tokio::test]
    async fn token_from_other_secret_is_rejected(service: JwtAuthService) {
        let other = JwtAuthService::new("other-secret", Duration::hours(1)).expect("config");
        let token = other
            .generate_token(&UserId::random())
            .await
            .expect("token");
        let err = service
            .validate_token(token.as_ref())
            .await
            .expect_err("foreign token must fail");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[tokio::test]
    async fn expired_token_is_rejected(service: JwtAuthService) {
        let issued = Utc::now() - Duration::hours(3);
        let token = service
            .issue_at(&UserId::random(), issued)
            .expect("token");
        let err = service
            .validate_token(token.as_ref())
            .await
            .expect_err("expired token must fail");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[case("")]
    #[case("not.a.jwt")]
    #[tokio::test]
    async fn garbage_is_rejected(service: JwtAuthService, #[case] raw: &str) {
        let err = service.validate_token(raw).await.expect_err("must fail");
        assert_eq!(err.message(), "invalid token");
    }
}
