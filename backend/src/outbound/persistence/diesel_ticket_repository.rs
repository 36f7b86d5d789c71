//! PostgreSQL-backed `TicketRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::Ticket;
use crate::domain::ports::{TicketRepository, TicketRepositoryError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error, unique_violation_constraint};
use super::models::NewTicketRow;
use super::pool::DbPool;
use super::schema::support_tickets;

/// Unique constraint guarding `support_tickets.ticket_number`.
pub(crate) const TICKET_NUMBER_CONSTRAINT: &str = "uk_ticket_number";

/// Diesel-backed implementation of the ticket repository port.
#[derive(Clone)]
pub struct DieselTicketRepository {
    pool: DbPool,
}

impl DieselTicketRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(error: diesel::result::Error, ticket: &Ticket) -> TicketRepositoryError {
    if unique_violation_constraint(&error) == Some(TICKET_NUMBER_CONSTRAINT) {
        return TicketRepositoryError::duplicate_ticket_number(ticket.ticket_number().as_str());
    }
    map_diesel_error(
        error,
        TicketRepositoryError::query,
        TicketRepositoryError::connection,
    )
}

#[async_trait]
impl TicketRepository for DieselTicketRepository {
    async fn insert(&self, ticket: &Ticket) -> Result<(), TicketRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, TicketRepositoryError::connection))?;

        let row = NewTicketRow {
            id: ticket.id(),
            ticket_number: ticket.ticket_number().as_str(),
            subject: ticket.subject().as_str(),
            description: ticket.description().as_str(),
            priority: ticket.priority().as_str(),
            status: ticket.status().as_str(),
            created_at: ticket.created_at(),
        };

        diesel::insert_into(support_tickets::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_error(err, ticket))
    }
}
