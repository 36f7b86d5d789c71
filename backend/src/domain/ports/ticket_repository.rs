//! Port for ticket persistence.

use async_trait::async_trait;

use crate::domain::Ticket;

use super::define_port_error;

define_port_error! {
    /// Errors raised by ticket repository adapters.
    pub enum TicketRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "ticket repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "ticket repository query failed: {message}",
        /// Another ticket already holds the number.
        DuplicateTicketNumber { ticket_number: String } =>
            "ticket number {ticket_number} is already assigned",
    }
}

/// Port for writing tickets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Persist a newly created ticket.
    ///
    /// Fails with [`TicketRepositoryError::DuplicateTicketNumber`] when the
    /// ticket number is already stored; nothing is written in that case.
    async fn insert(&self, ticket: &Ticket) -> Result<(), TicketRepositoryError>;
}
