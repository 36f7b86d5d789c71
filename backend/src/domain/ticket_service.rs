//! Ticket creation service.
//!
//! Implements the [`TicketCommand`] driving port: parse the priority, take
//! one value from the sequence allocator, format the ticket number with the
//! clock's current year, then persist. Failures are surfaced immediately;
//! nothing is retried.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use mockable::Clock;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::ports::{
    CreateTicketRequest, SequenceAllocator, SequenceAllocatorError, TicketCommand,
    TicketRepository, TicketRepositoryError,
};
use crate::domain::{CorrelationId, Error, Priority, Ticket, TicketDraft, TicketNumber};

fn correlation_field() -> String {
    CorrelationId::current()
        .map(|id| id.to_string())
        .unwrap_or_default()
}

fn map_allocator_error(error: SequenceAllocatorError) -> Error {
    error!(
        correlation_id = %correlation_field(),
        error = %error,
        "ticket sequence allocation failed"
    );
    Error::internal(format!("ticket sequence unavailable: {error}"))
}

fn map_repository_error(error: TicketRepositoryError) -> Error {
    match error {
        TicketRepositoryError::DuplicateTicketNumber { ticket_number } => {
            warn!(
                correlation_id = %correlation_field(),
                ticket_number = %ticket_number,
                "ticket number collision"
            );
            Error::conflict(format!("ticket number {ticket_number} is already assigned"))
        }
        other => {
            error!(
                correlation_id = %correlation_field(),
                error = %other,
                "ticket persistence failed"
            );
            Error::internal(format!("ticket repository error: {other}"))
        }
    }
}

/// Ticket service implementing [`TicketCommand`].
#[derive(Clone)]
pub struct TicketService<A, R> {
    allocator: Arc<A>,
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<A, R> TicketService<A, R> {
    /// Create a service over the given allocator, repository and clock.
    pub fn new(allocator: Arc<A>, repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            allocator,
            repository,
            clock,
        }
    }
}

impl<A, R> TicketService<A, R>
where
    A: SequenceAllocator,
{
    async fn next_ticket_number(&self, year: i32) -> Result<TicketNumber, Error> {
        let sequence = self
            .allocator
            .allocate_next()
            .await
            .map_err(map_allocator_error)?;
        Ok(TicketNumber::format(sequence, year))
    }
}

#[async_trait]
impl<A, R> TicketCommand for TicketService<A, R>
where
    A: SequenceAllocator,
    R: TicketRepository,
{
    async fn create_ticket(&self, request: CreateTicketRequest) -> Result<Ticket, Error> {
        let priority = request.priority.parse::<Priority>().map_err(|err| {
            warn!(
                correlation_id = %correlation_field(),
                priority = %request.priority,
                "ticket rejected: unknown priority"
            );
            Error::bad_request(err.to_string())
        })?;

        // One reading so the number's year always matches `created_at`.
        let now = self.clock.utc();
        let ticket_number = self.next_ticket_number(now.year()).await?;
        let ticket = Ticket::new(TicketDraft {
            id: Uuid::new_v4(),
            ticket_number,
            subject: request.subject,
            description: request.description,
            priority,
            created_at: now,
        });

        self.repository
            .insert(&ticket)
            .await
            .map_err(map_repository_error)?;

        info!(
            ticket_number = %ticket.ticket_number(),
            priority = %ticket.priority(),
            correlation_id = %correlation_field(),
            "ticket created"
        );
        Ok(ticket)
    }
}

#[cfg(test)]
#[path = "ticket_service_tests.rs"]
mod tests;
