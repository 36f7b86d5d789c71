//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::TicketCommand;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use support_tickets::domain::TicketService;
/// use support_tickets::inbound::http::state::HttpState;
/// use support_tickets::outbound::memory::{InMemorySequenceAllocator, InMemoryTicketRepository};
///
/// let service = TicketService::new(
///     Arc::new(InMemorySequenceAllocator::new()),
///     Arc::new(InMemoryTicketRepository::new()),
///     Arc::new(DefaultClock),
/// );
/// let state = HttpState::new(Arc::new(service));
/// let _tickets = state.tickets.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub tickets: Arc<dyn TicketCommand>,
}

impl HttpState {
    /// Construct state from the ticket creation port.
    pub fn new(tickets: Arc<dyn TicketCommand>) -> Self {
        Self { tickets }
    }
}
