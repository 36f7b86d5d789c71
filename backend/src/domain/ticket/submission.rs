//! Structural validation of raw ticket submissions.

use crate::domain::ports::CreateTicketRequest;
use crate::domain::{Error, FieldError};

use super::{TicketDescription, TicketSubject};

/// Ticket fields exactly as a caller supplied them.
///
/// Any field may be absent. [`TicketSubmission::validate`] checks every
/// field and reports all violations together, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketSubmission {
    /// Subject text as received.
    pub subject: Option<String>,
    /// Description text as received.
    pub description: Option<String>,
    /// Priority text, not yet parsed.
    pub priority: Option<String>,
}

const NOT_NULL: &str = "must not be null";

impl TicketSubmission {
    /// Check structure and produce a request ready for the creation use case.
    ///
    /// Priority is only checked for presence here; its value is parsed by
    /// the use case.
    ///
    /// # Examples
    /// ```
    /// use support_tickets::domain::{ErrorCode, TicketSubmission};
    ///
    /// let err = TicketSubmission {
    ///     subject: Some("Hi".to_owned()),
    ///     description: None,
    ///     priority: Some("LOW".to_owned()),
    /// }
    /// .validate()
    /// .expect_err("subject too short and description missing");
    /// assert_eq!(err.code(), ErrorCode::ValidationError);
    /// assert_eq!(err.field_errors().len(), 2);
    /// ```
    pub fn validate(self) -> Result<CreateTicketRequest, Error> {
        let mut violations = Vec::new();

        let subject = check_field("subject", self.subject, TicketSubject::new, &mut violations);
        let description = check_field(
            "description",
            self.description,
            TicketDescription::new,
            &mut violations,
        );
        if self.priority.is_none() {
            violations.push(FieldError::new("priority", NOT_NULL));
        }

        match (subject, description, self.priority) {
            (Some(subject), Some(description), Some(priority)) if violations.is_empty() => {
                Ok(CreateTicketRequest {
                    subject,
                    description,
                    priority,
                })
            }
            _ => Err(Error::validation(violations)),
        }
    }
}

fn check_field<T, E: ToString>(
    field: &str,
    value: Option<String>,
    parse: impl FnOnce(String) -> Result<T, E>,
    violations: &mut Vec<FieldError>,
) -> Option<T> {
    match parse(value.unwrap_or_default()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            violations.push(FieldError::new(field, err.to_string()));
            None
        }
    }
}
