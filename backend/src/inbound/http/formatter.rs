//! Client-facing shapes for accounts and validation failures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::ports::Token;
use crate::domain::{FieldErrors, User};

/// Public view of an account returned by every account endpoint.
///
/// Never carries the password hash, role or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserView {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "engineer")]
    pub occupation: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Bearer token issued for this account; empty when none was issued.
    pub token: String,
    /// Avatar path; empty until an avatar is uploaded.
    pub image_url: String,
}

/// Combine a stored user with a freshly issued token.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use crowdfund::domain::ports::Token;
/// use crowdfund::domain::{EmailAddress, User};
/// use crowdfund::inbound::http::formatter::format_user;
///
/// let email = EmailAddress::new("a@x.com").unwrap();
/// let user = User::new("Alice", "eng", email, "hash", Utc::now());
/// let view = format_user(&user, Token::new("tok123"));
/// assert_eq!(view.token, "tok123");
/// assert_eq!(view.image_url, "");
/// ```
pub fn format_user(user: &User, token: Token) -> UserView {
    UserView {
        id: user.id.to_string(),
        name: user.name.clone(),
        occupation: user.occupation.clone(),
        email: user.email.to_string(),
        token: token.into(),
        image_url: user.avatar_file_name.clone().unwrap_or_default(),
    }
}

/// Map each failing field to its message; the first failure per field wins.
pub fn format_validation_error(errors: &FieldErrors) -> Map<String, Value> {
    let mut fields = Map::new();
    for error in errors.iter() {
        fields
            .entry(error.field())
            .or_insert_with(|| Value::String(error.to_string()));
    }
    fields
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{EmailAddress, FieldError};
    use chrono::Utc;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn view_exposes_public_fields_only() {
        let email = EmailAddress::new("Alice@Example.com").expect("valid email");
        let mut user = User::new("Alice", "eng", email, "argon-hash", Utc::now());
        user.avatar_file_name = Some("images/alice.png".to_owned());

        let view = format_user(&user, Token::new("tok123"));
        let value = serde_json::to_value(&view).expect("serialise view");
        assert_eq!(
            value,
            json!({
                "id": user.id.to_string(),
                "name": "Alice",
                "occupation": "eng",
                "email": "alice@example.com",
                "token": "tok123",
                "image_url": "images/alice.png",
            })
        );
        assert!(!value.to_string().contains("argon-hash"));
    }

    #[rstest]
    fn validation_map_keeps_first_message_per_field() {
        let mut errors = FieldErrors::default();
        errors.push(FieldError::Required { field: "name" });
        errors.push(FieldError::TooShort {
            field: "password",
            min: 6,
        });
        errors.push(FieldError::Required { field: "password" });

        let map = format_validation_error(&errors);
        assert_eq!(
            Value::Object(map),
            json!({
                "name": "name is required",
                "password": "password must be at least 6 characters",
            })
        );
    }

    #[rstest]
    fn malformed_body_is_keyed_by_body() {
        let map = format_validation_error(&FieldErrors::malformed_body("expected value"));
        assert_eq!(map.get("body"), Some(&json!("expected value")));
    }
}
