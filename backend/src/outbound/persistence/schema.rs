//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations`
//! exactly. Regenerate with `diesel print-schema` when the schema changes.

diesel::table! {
    /// Support tickets opened through the intake endpoint.
    ///
    /// `ticket_number` carries the unique constraint `uk_ticket_number`.
    support_tickets (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Human-readable number, `TCK-<year>-<sequence>`.
        ticket_number -> Varchar,
        subject -> Varchar,
        description -> Varchar,
        /// One of `LOW`, `MEDIUM`, `HIGH`.
        priority -> Varchar,
        /// Always `OPEN`; tickets have no lifecycle transitions.
        status -> Varchar,
        created_at -> Timestamptz,
    }
}
