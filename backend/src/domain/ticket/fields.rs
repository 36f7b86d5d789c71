//! Length-bounded text fields carried by a ticket.

use std::fmt;

/// Violations raised by the text field constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketFieldError {
    /// The value was empty once trimmed.
    Blank,
    /// The value fell outside the inclusive character bounds.
    Length { min: usize, max: usize },
}

impl fmt::Display for TicketFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str("must not be blank"),
            Self::Length { min, max } => write!(f, "size must be between {min} and {max}"),
        }
    }
}

impl std::error::Error for TicketFieldError {}

fn bounded_text(value: String, min: usize, max: usize) -> Result<String, TicketFieldError> {
    if value.trim().is_empty() {
        return Err(TicketFieldError::Blank);
    }
    let length = value.chars().count();
    if length < min || length > max {
        return Err(TicketFieldError::Length { min, max });
    }
    Ok(value)
}

macro_rules! bounded_text_field {
    ($(#[$meta:meta])* $name:ident, $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            /// Fewest characters accepted.
            pub const MIN_CHARS: usize = $min;
            /// Most characters accepted.
            pub const MAX_CHARS: usize = $max;

            /// Validate and wrap the value. Lengths count Unicode scalar values.
            pub fn new(value: impl Into<String>) -> Result<Self, TicketFieldError> {
                bounded_text(value.into(), Self::MIN_CHARS, Self::MAX_CHARS).map(Self)
            }

            /// Borrow the validated text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_text_field!(
    /// Short ticket headline, 5 to 120 characters.
    ///
    /// # Examples
    /// ```
    /// use support_tickets::domain::TicketSubject;
    ///
    /// assert!(TicketSubject::new("Login fails").is_ok());
    /// assert!(TicketSubject::new("   ").is_err());
    /// ```
    TicketSubject,
    5,
    120
);

bounded_text_field!(
    /// Free-form ticket body, 20 to 2000 characters.
    TicketDescription,
    20,
    2000
);
