//! Driving port for ticket creation.
//!
//! Inbound adapters validate request structure first, then hand a
//! [`CreateTicketRequest`] to this port. Priority values are parsed by the
//! implementation so that an unknown priority never consumes a sequence
//! value.

use async_trait::async_trait;

use crate::domain::{Error, Ticket, TicketDescription, TicketSubject};

/// Structurally valid request to open a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicketRequest {
    /// Subject that passed length checks.
    pub subject: TicketSubject,
    /// Description that passed length checks.
    pub description: TicketDescription,
    /// Raw priority text, parsed case-sensitively by the use case.
    pub priority: String,
}

/// Driving port for ticket write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketCommand: Send + Sync {
    /// Opens a ticket and returns it as persisted.
    ///
    /// Callers should handle `Result::Err(Error)` for priority, conflict and
    /// storage failures at the boundary layer.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use support_tickets::domain::{TicketDescription, TicketSubject};
    /// # use support_tickets::domain::ports::{CreateTicketRequest, TicketCommand};
    /// # async fn example(command: &dyn TicketCommand) -> Result<(), support_tickets::domain::Error> {
    /// let ticket = command
    ///     .create_ticket(CreateTicketRequest {
    ///         subject: TicketSubject::new("Login fails").expect("valid subject"),
    ///         description: TicketDescription::new("Cannot log in since this morning.")
    ///             .expect("valid description"),
    ///         priority: "HIGH".to_owned(),
    ///     })
    ///     .await?;
    /// println!("{}", ticket.ticket_number());
    /// # Ok(())
    /// # }
    /// ```
    async fn create_ticket(&self, request: CreateTicketRequest) -> Result<Ticket, Error>;
}
