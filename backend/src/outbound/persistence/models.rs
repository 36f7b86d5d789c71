//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use uuid::Uuid;

use super::schema::support_tickets;

/// Insertable struct for creating new ticket records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = support_tickets)]
pub(crate) struct NewTicketRow<'a> {
    pub id: Uuid,
    pub ticket_number: &'a str,
    pub subject: &'a str,
    pub description: &'a str,
    pub priority: &'a str,
    pub status: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Single value returned by `nextval`.
#[derive(Debug, Clone, Copy, QueryableByName)]
pub(crate) struct SequenceValueRow {
    #[diesel(sql_type = BigInt)]
    pub value: i64,
}
