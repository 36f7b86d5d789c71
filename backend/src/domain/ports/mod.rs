//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod sequence_allocator;
mod ticket_command;
mod ticket_repository;

#[cfg(test)]
pub use sequence_allocator::MockSequenceAllocator;
pub use sequence_allocator::{SequenceAllocator, SequenceAllocatorError};
#[cfg(test)]
pub use ticket_command::MockTicketCommand;
pub use ticket_command::{CreateTicketRequest, TicketCommand};
#[cfg(test)]
pub use ticket_repository::MockTicketRepository;
pub use ticket_repository::{TicketRepository, TicketRepositoryError};
