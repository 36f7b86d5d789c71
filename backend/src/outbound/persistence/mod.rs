//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the ticket driven ports backed by PostgreSQL
//! via `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: implementations only translate between Diesel rows
//!   and domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database failures map to the port error
//!   enums; a unique violation on `uk_ticket_number` is reported as a
//!   duplicate ticket number.
//!
//! # Example
//!
//! ```no_run
//! use support_tickets::outbound::persistence::{
//!     DbPool, DieselSequenceAllocator, DieselTicketRepository, PoolConfig,
//! };
//!
//! # async fn example() -> Result<(), support_tickets::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://tickets@localhost/tickets")).await?;
//! let allocator = DieselSequenceAllocator::new(pool.clone());
//! let repository = DieselTicketRepository::new(pool);
//! # let _ = (allocator, repository);
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_sequence_allocator;
mod diesel_ticket_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_sequence_allocator::DieselSequenceAllocator;
pub use diesel_ticket_repository::DieselTicketRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
