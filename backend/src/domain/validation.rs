//! Field-level validation failures for inbound account payloads.
//!
//! Constructors collect every failing field instead of stopping at the first
//! one, so clients can fix a form in a single round trip.

use std::fmt;

/// Field name used when the body as a whole could not be decoded.
pub const BODY_FIELD: &str = "body";

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field was absent or blank.
    #[error("{field} is required")]
    Required { field: &'static str },
    /// The field is not a well-formed email address.
    #[error("{field} must be a valid email address")]
    InvalidEmail { field: &'static str },
    /// The field is shorter than the allowed minimum.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    /// The body could not be decoded at all.
    #[error("{message}")]
    MalformedBody { message: String },
}

impl FieldError {
    /// Name of the offending field as it appears in the request body.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::InvalidEmail { field }
            | Self::TooShort { field, .. } => *field,
            Self::MalformedBody { .. } => BODY_FIELD,
        }
    }
}

/// Ordered collection of field failures.
///
/// # Examples
/// ```
/// use crowdfund::domain::{FieldError, FieldErrors};
///
/// let mut errors = FieldErrors::default();
/// errors.push(FieldError::Required { field: "name" });
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.to_string(), "name is required");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Build a collection holding a single body decoding failure.
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self(vec![FieldError::MalformedBody {
            message: message.into(),
        }])
    }

    /// Record another failure.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Whether no failures were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate failures in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Trimmed value of a required text field, recording a failure when blank.
pub(crate) fn required_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<&str>,
) -> Option<String> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Some(trimmed.to_owned()),
        _ => {
            errors.push(FieldError::Required { field });
            None
        }
    }
}
