//! Process-local adapters for tests and explicit in-memory development mode.
//!
//! State lives only as long as the process. The allocator restarts from zero
//! on every launch, so these adapters must never back a deployment that
//! expects ticket numbers to survive restarts.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::domain::Ticket;
use crate::domain::ports::{
    SequenceAllocator, SequenceAllocatorError, TicketRepository, TicketRepositoryError,
};

/// Sequence allocator backed by an atomic counter.
///
/// # Examples
/// ```
/// use support_tickets::domain::ports::SequenceAllocator;
/// use support_tickets::outbound::memory::InMemorySequenceAllocator;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let allocator = InMemorySequenceAllocator::starting_after(41);
/// assert_eq!(allocator.allocate_next().await, Ok(42));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemorySequenceAllocator {
    last: AtomicU64,
}

impl InMemorySequenceAllocator {
    /// Allocator whose first value is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator whose first value is `last + 1`.
    #[must_use]
    pub const fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }
}

#[async_trait]
impl SequenceAllocator for InMemorySequenceAllocator {
    async fn allocate_next(&self) -> Result<u64, SequenceAllocatorError> {
        // Saturates at the limit so no value is ever handed out twice.
        self.last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|previous| previous + 1)
            .map_err(|_| SequenceAllocatorError::query("in-memory sequence exhausted"))
    }
}

/// Ticket repository keyed by ticket number.
#[derive(Debug, Default)]
pub struct InMemoryTicketRepository {
    tickets: Mutex<HashMap<String, Ticket>>,
}

impl InMemoryTicketRepository {
    /// Empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored ticket, in no particular order.
    pub fn tickets(&self) -> Result<Vec<Ticket>, TicketRepositoryError> {
        let guard = self
            .tickets
            .lock()
            .map_err(|_| TicketRepositoryError::query("ticket store lock poisoned"))?;
        Ok(guard.values().cloned().collect())
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn insert(&self, ticket: &Ticket) -> Result<(), TicketRepositoryError> {
        let mut guard = self
            .tickets
            .lock()
            .map_err(|_| TicketRepositoryError::query("ticket store lock poisoned"))?;
        let key = ticket.ticket_number().as_str();
        if guard.contains_key(key) {
            return Err(TicketRepositoryError::duplicate_ticket_number(key));
        }
        guard.insert(key.to_owned(), ticket.clone());
        Ok(())
    }
}
