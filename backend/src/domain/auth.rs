//! Account inputs: registration, login and email availability.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate raw string inputs before a handler talks to a port.
//! Every constructor reports all failing fields at once.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::user::{EmailAddress, UserValidationError};
use crate::domain::validation::{FieldError, FieldErrors, required_text};

/// Minimum number of characters accepted for a new password.
pub const PASSWORD_MIN_LENGTH: usize = 6;

fn required_email(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<&str>,
) -> Option<EmailAddress> {
    let raw = required_text(errors, field, value)?;
    match EmailAddress::new(raw) {
        Ok(email) => Some(email),
        Err(UserValidationError::EmptyEmail) => {
            errors.push(FieldError::Required { field });
            None
        }
        Err(_) => {
            errors.push(FieldError::InvalidEmail { field });
            None
        }
    }
}

fn required_password(
    errors: &mut FieldErrors,
    value: Option<&str>,
    min: Option<usize>,
) -> Option<Zeroizing<String>> {
    let field = "password";
    let Some(password) = value.filter(|password| !password.is_empty()) else {
        errors.push(FieldError::Required { field });
        return None;
    };
    if let Some(min) = min {
        if password.chars().count() < min {
            errors.push(FieldError::TooShort { field, min });
            return None;
        }
    }
    Some(Zeroizing::new(password.to_owned()))
}

/// Validated registration request.
///
/// ## Invariants
/// - `name` and `occupation` are trimmed and non-empty.
/// - `email` is a normalised [`EmailAddress`].
/// - `password` has at least [`PASSWORD_MIN_LENGTH`] characters and keeps
///   caller-provided whitespace.
///
/// # Examples
/// ```
/// use crowdfund::domain::RegisterUserInput;
///
/// let input = RegisterUserInput::try_from_parts(
///     Some("Alice"),
///     Some("a@x.com"),
///     Some("eng"),
///     Some("secret1"),
/// )
/// .unwrap();
/// assert_eq!(input.email().as_ref(), "a@x.com");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterUserInput {
    name: String,
    email: EmailAddress,
    occupation: String,
    password: Zeroizing<String>,
}

impl RegisterUserInput {
    /// Validate raw registration fields, collecting every failure.
    pub fn try_from_parts(
        name: Option<&str>,
        email: Option<&str>,
        occupation: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = required_text(&mut errors, "name", name);
        let email = required_email(&mut errors, "email", email);
        let occupation = required_text(&mut errors, "occupation", occupation);
        let password = required_password(&mut errors, password, Some(PASSWORD_MIN_LENGTH));

        match (name, email, occupation, password) {
            (Some(name), Some(email), Some(occupation), Some(password)) if errors.is_empty() => {
                Ok(Self {
                    name,
                    email,
                    occupation,
                    password,
                })
            }
            _ => Err(errors),
        }
    }

    /// Display name of the new account.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Normalised email of the new account.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Occupation shown on the profile.
    pub fn occupation(&self) -> &str {
        self.occupation.as_str()
    }

    /// Plain-text password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for RegisterUserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("occupation", &self.occupation)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated login request.
///
/// ## Invariants
/// - `email` is trimmed and non-empty. Its format is not checked here; an
///   unknown or malformed address is a credential failure for the service.
/// - `password` is non-empty and keeps caller-provided whitespace.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginInput {
    email: String,
    password: Zeroizing<String>,
}

impl LoginInput {
    /// Validate raw login fields, collecting every failure.
    pub fn try_from_parts(email: Option<&str>, password: Option<&str>) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = required_text(&mut errors, "email", email);
        let password = required_password(&mut errors, password, None);

        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => Ok(Self { email, password }),
            _ => Err(errors),
        }
    }

    /// Email as typed by the caller, trimmed.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plain-text password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated email availability query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEmailInput {
    email: EmailAddress,
}

impl CheckEmailInput {
    /// Validate the raw email field.
    pub fn try_from_parts(email: Option<&str>) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        match required_email(&mut errors, "email", email) {
            Some(email) if errors.is_empty() => Ok(Self { email }),
            _ => Err(errors),
        }
    }

    /// Normalised email to look up.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn fields(errors: &FieldErrors) -> Vec<&'static str> {
        errors.iter().map(FieldError::field).collect()
    }

    #[rstest]
    #[case(None, Some("a@x.com"), Some("eng"), Some("secret1"), vec!["name"])]
    #[case(Some("Alice"), None, Some("eng"), Some("secret1"), vec!["email"])]
    #[case(Some("Alice"), Some("nope"), Some("eng"), Some("secret1"), vec!["email"])]
    #[case(Some("Alice"), Some("a@x.com"), Some("  "), Some("secret1"), vec!["occupation"])]
    #[case(Some("Alice"), Some("a@x.com"), Some("eng"), Some(""), vec!["password"])]
    #[case(Some("Alice"), Some("a@x.com"), Some("eng"), Some("abc"), vec!["password"])]
    #[case(None, Some("bad"), None, Some(""), vec!["name", "email", "occupation", "password"])]
    fn register_reports_every_invalid_field(
        #[case] name: Option<&str>,
        #[case] email: Option<&str>,
        #[case] occupation: Option<&str>,
        #[case] password: Option<&str>,
        #[case] expected: Vec<&'static str>,
    ) {
        let errors = RegisterUserInput::try_from_parts(name, email, occupation, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(fields(&errors), expected);
    }

    #[rstest]
    fn register_reports_short_password_with_minimum() {
        let errors =
            RegisterUserInput::try_from_parts(Some("A"), Some("a@x.com"), Some("e"), Some("12345"))
                .expect_err("short password must fail");
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![&FieldError::TooShort {
                field: "password",
                min: PASSWORD_MIN_LENGTH,
            }]
        );
    }

    #[rstest]
    fn register_trims_text_and_keeps_password() {
        let input = RegisterUserInput::try_from_parts(
            Some("  Alice "),
            Some(" A@X.com "),
            Some(" eng "),
            Some(" secret1 "),
        )
        .expect("valid inputs should succeed");
        assert_eq!(input.name(), "Alice");
        assert_eq!(input.email().as_ref(), "a@x.com");
        assert_eq!(input.occupation(), "eng");
        assert_eq!(input.password(), " secret1 ");
    }

    #[rstest]
    fn debug_output_redacts_passwords() {
        let register =
            RegisterUserInput::try_from_parts(Some("A"), Some("a@x.com"), Some("e"), Some("hunter22"))
                .expect("valid");
        let login = LoginInput::try_from_parts(Some("a@x.com"), Some("hunter22")).expect("valid");
        assert!(!format!("{register:?}").contains("hunter22"));
        assert!(!format!("{login:?}").contains("hunter22"));
    }

    #[rstest]
    #[case(None, Some("pw"), vec!["email"])]
    #[case(Some("   "), Some("pw"), vec!["email"])]
    #[case(Some("a@x.com"), None, vec!["password"])]
    #[case(Some("a@x.com"), Some(""), vec!["password"])]
    #[case(None, None, vec!["email", "password"])]
    fn login_requires_both_fields(
        #[case] email: Option<&str>,
        #[case] password: Option<&str>,
        #[case] expected: Vec<&'static str>,
    ) {
        let errors = LoginInput::try_from_parts(email, password).expect_err("must fail");
        assert_eq!(fields(&errors), expected);
    }

    #[rstest]
    fn login_accepts_short_passwords() {
        let input = LoginInput::try_from_parts(Some(" a@x.com "), Some("pw")).expect("valid");
        assert_eq!(input.email(), "a@x.com");
        assert_eq!(input.password(), "pw");
    }

    #[rstest]
    #[case(None, FieldError::Required { field: "email" })]
    #[case(Some("nope"), FieldError::InvalidEmail { field: "email" })]
    fn check_email_rejects_invalid_input(
        #[case] email: Option<&str>,
        #[case] expected: FieldError,
    ) {
        let errors = CheckEmailInput::try_from_parts(email).expect_err("must fail");
        assert_eq!(errors.iter().collect::<Vec<_>>(), vec![&expected]);
    }
}
