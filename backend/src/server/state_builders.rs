//! Builders wiring ticket ports to the configured storage.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use support_tickets::domain::TicketService;
use support_tickets::domain::ports::{SequenceAllocator, TicketCommand, TicketRepository};
use support_tickets::inbound::http::state::HttpState;
use support_tickets::outbound::memory::{InMemorySequenceAllocator, InMemoryTicketRepository};
use support_tickets::outbound::persistence::{DieselSequenceAllocator, DieselTicketRepository};

use super::TicketStorage;

fn ticket_service<A, R>(
    allocator: A,
    repository: R,
    clock: Arc<dyn Clock>,
) -> Arc<dyn TicketCommand>
where
    A: SequenceAllocator + 'static,
    R: TicketRepository + 'static,
{
    Arc::new(TicketService::new(
        Arc::new(allocator),
        Arc::new(repository),
        clock,
    ))
}

/// Build the ticket command port for `storage` using `clock` for timestamps.
fn build_ticket_command(
    storage: &TicketStorage,
    clock: Arc<dyn Clock>,
) -> Arc<dyn TicketCommand> {
    match storage {
        TicketStorage::Database(pool) => ticket_service(
            DieselSequenceAllocator::new(pool.clone()),
            DieselTicketRepository::new(pool.clone()),
            clock,
        ),
        TicketStorage::InMemory => ticket_service(
            InMemorySequenceAllocator::new(),
            InMemoryTicketRepository::new(),
            clock,
        ),
    }
}

/// Build shared HTTP state for the configured storage.
pub(super) fn build_http_state(storage: &TicketStorage) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(build_ticket_command(
        storage,
        Arc::new(DefaultClock),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::rstest;
    use support_tickets::domain::ports::CreateTicketRequest;
    use support_tickets::domain::{TicketDescription, TicketSubject};

    struct FixtureClock;

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2031, 1, 2, 3, 4, 5)
                .single()
                .expect("valid fixture timestamp")
        }
    }

    fn request() -> CreateTicketRequest {
        CreateTicketRequest {
            subject: TicketSubject::new("Printer jammed").expect("valid subject"),
            description: TicketDescription::new("Paper is stuck in tray two again.")
                .expect("valid description"),
            priority: "MEDIUM".to_owned(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn in_memory_storage_numbers_from_one() {
        let command = build_ticket_command(&TicketStorage::InMemory, Arc::new(FixtureClock));

        let first = command.create_ticket(request()).await.expect("first ticket");
        let second = command.create_ticket(request()).await.expect("second ticket");

        assert_eq!(first.ticket_number().as_str(), "TCK-2031-000001");
        assert_eq!(second.ticket_number().as_str(), "TCK-2031-000002");
    }

    #[rstest]
    #[tokio::test]
    async fn separate_in_memory_states_do_not_share_counters() {
        let first = build_ticket_command(&TicketStorage::InMemory, Arc::new(FixtureClock));
        let second = build_ticket_command(&TicketStorage::InMemory, Arc::new(FixtureClock));

        let a = first.create_ticket(request()).await.expect("ticket");
        let b = second.create_ticket(request()).await.expect("ticket");

        assert_eq!(a.ticket_number(), b.ticket_number());
    }
}
