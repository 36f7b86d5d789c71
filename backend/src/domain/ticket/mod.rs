//! Support ticket entity and its value types.
//!
//! Tickets are immutable once constructed. Text fields and priority are
//! validated before a ticket exists, so the entity itself carries no failure
//! modes; the only invariant it owns is that new tickets start `OPEN`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

mod fields;
mod number;
mod priority;
mod submission;

pub use fields::{TicketDescription, TicketFieldError, TicketSubject};
pub use number::{TicketNumber, TicketNumberParseError};
pub use priority::{ParsePriorityError, Priority, PRIORITY_ERROR_MESSAGE, TicketStatus};
pub use submission::TicketSubmission;

/// Input payload for [`Ticket::new`].
#[derive(Debug, Clone)]
pub struct TicketDraft {
    /// Storage identifier.
    pub id: Uuid,
    /// Number allocated for this ticket.
    pub ticket_number: TicketNumber,
    /// Validated subject line.
    pub subject: TicketSubject,
    /// Validated problem description.
    pub description: TicketDescription,
    /// Parsed priority.
    pub priority: Priority,
    /// Instant the ticket was opened.
    pub created_at: DateTime<Utc>,
}

/// A support ticket as persisted by the repository.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use support_tickets::domain::{
///     Priority, Ticket, TicketDescription, TicketDraft, TicketNumber, TicketStatus, TicketSubject,
/// };
/// use uuid::Uuid;
///
/// let ticket = Ticket::new(TicketDraft {
///     id: Uuid::new_v4(),
///     ticket_number: TicketNumber::format(1, 2025),
///     subject: TicketSubject::new("Login fails").expect("valid subject"),
///     description: TicketDescription::new("Cannot log in since this morning.")
///         .expect("valid description"),
///     priority: Priority::High,
///     created_at: Utc::now(),
/// });
/// assert_eq!(ticket.status(), TicketStatus::Open);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: Uuid,
    ticket_number: TicketNumber,
    subject: TicketSubject,
    description: TicketDescription,
    priority: Priority,
    status: TicketStatus,
    created_at: DateTime<Utc>,
}

impl Ticket {
    /// Construct a newly opened ticket.
    #[must_use]
    pub fn new(draft: TicketDraft) -> Self {
        let TicketDraft {
            id,
            ticket_number,
            subject,
            description,
            priority,
            created_at,
        } = draft;
        Self {
            id,
            ticket_number,
            subject,
            description,
            priority,
            status: TicketStatus::Open,
            created_at,
        }
    }

    /// Opaque identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Human-readable sequential number.
    #[must_use]
    pub const fn ticket_number(&self) -> &TicketNumber {
        &self.ticket_number
    }

    /// Subject line.
    #[must_use]
    pub const fn subject(&self) -> &TicketSubject {
        &self.subject
    }

    /// Problem description.
    #[must_use]
    pub const fn description(&self) -> &TicketDescription {
        &self.description
    }

    /// Priority chosen by the submitter.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Lifecycle status; always `OPEN` at creation.
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    /// Creation timestamp taken from the service clock.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
