//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed allocator and repository using Diesel
//! - **memory**: process-local allocator and repository for tests and
//!   explicitly enabled development mode
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
