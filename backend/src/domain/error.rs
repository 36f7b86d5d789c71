//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope. Every error captures the
//! correlation identifier in scope when it is constructed so that responses
//! and logs can be joined up later.

use serde::{Deserialize, Serialize};

use crate::domain::CorrelationId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// One or more request fields failed structural validation.
    ValidationError,
    /// The request is well formed but carries an unacceptable value.
    BadRequest,
    /// The request collides with existing state.
    Conflict,
    /// An unexpected error occurred inside the service.
    InternalError,
}

impl ErrorCode {
    /// Message used when an error is constructed without one.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::BadRequest => "Bad request",
            Self::Conflict => "Conflict",
            Self::InternalError => "Something went wrong",
        }
    }
}

/// A single rejected request field.
///
/// # Examples
/// ```
/// use support_tickets::domain::FieldError;
///
/// let field = FieldError::new("subject", "must not be blank");
/// assert_eq!(field.field(), "subject");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    field: String,
    message: String,
}

impl FieldError {
    /// Build a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the rejected field as it appears on the wire.
    #[must_use]
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Human-readable reason for the rejection.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is never blank; blank messages fall back to
///   [`ErrorCode::default_message`].
/// - `field_errors` keeps the order in which violations were detected.
///
/// # Examples
/// ```
/// use support_tickets::domain::{Error, ErrorCode};
///
/// let err = Error::conflict("ticket number already assigned");
/// assert_eq!(err.code(), ErrorCode::Conflict);
/// assert!(err.field_errors().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,
    code: ErrorCode,
    message: String,
    #[serde(default)]
    field_errors: Vec<FieldError>,
}

/// Validation errors emitted by the fallible constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The supplied message was blank.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Create a new error, capturing the correlation identifier in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message)
            .unwrap_or_else(|_| Self::build(code, code.default_message().to_owned()))
    }

    /// Fallible constructor that rejects blank messages.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self::build(code, message))
    }

    fn build(code: ErrorCode, message: String) -> Self {
        Self {
            correlation_id: CorrelationId::current().map(|id| id.to_string()),
            code,
            message,
            field_errors: Vec::new(),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured at construction, if any.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Field-level violations in detection order.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        self.field_errors.as_slice()
    }

    /// Whether the error is recoverable by the caller fixing its input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self.code, ErrorCode::ValidationError | ErrorCode::BadRequest)
    }

    /// Attach an explicit correlation identifier.
    #[must_use]
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Replace the field errors carried by this error.
    #[must_use]
    pub fn with_field_errors(mut self, field_errors: Vec<FieldError>) -> Self {
        self.field_errors = field_errors;
        self
    }

    /// Structural validation failure listing every rejected field.
    ///
    /// # Examples
    /// ```
    /// use support_tickets::domain::{Error, ErrorCode, FieldError};
    ///
    /// let err = Error::validation(vec![FieldError::new("subject", "must not be blank")]);
    /// assert_eq!(err.code(), ErrorCode::ValidationError);
    /// assert_eq!(err.message(), "Request validation failed");
    /// ```
    #[must_use]
    pub fn validation(field_errors: Vec<FieldError>) -> Self {
        Self::new(
            ErrorCode::ValidationError,
            ErrorCode::ValidationError.default_message(),
        )
        .with_field_errors(field_errors)
    }

    /// Convenience constructor for [`ErrorCode::BadRequest`].
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
