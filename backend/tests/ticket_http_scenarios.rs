//! End-to-end intake scenarios through the HTTP adapter.
//!
//! The application is assembled exactly as the server does it, backed by
//! the process-local adapters so no database is required.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{Datelike, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use support_tickets::Correlation;
use support_tickets::domain::ports::SequenceAllocator;
use support_tickets::domain::{CORRELATION_ID_HEADER, TicketNumber, TicketService};
use support_tickets::inbound::http::configure;
use support_tickets::inbound::http::health::HealthState;
use support_tickets::inbound::http::state::HttpState;
use support_tickets::outbound::memory::{InMemorySequenceAllocator, InMemoryTicketRepository};

struct Harness {
    allocator: Arc<InMemorySequenceAllocator>,
    repository: Arc<InMemoryTicketRepository>,
}

impl Harness {
    fn state(&self) -> HttpState {
        HttpState::new(Arc::new(TicketService::new(
            Arc::clone(&self.allocator),
            Arc::clone(&self.repository),
            Arc::new(DefaultClock),
        )))
    }

    fn stored(&self) -> usize {
        self.repository.tickets().expect("ticket snapshot").len()
    }
}

#[fixture]
fn harness() -> Harness {
    Harness {
        allocator: Arc::new(InMemorySequenceAllocator::new()),
        repository: Arc::new(InMemoryTicketRepository::new()),
    }
}

async fn submit(harness: &Harness, payload: Value) -> (StatusCode, Option<String>, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(harness.state()))
            .app_data(web::Data::new(HealthState::new()))
            .wrap(Correlation)
            .configure(configure),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/api/tickets")
        .set_json(payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    let status = res.status();
    let correlation = res
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(res).await;
    (status, correlation, body)
}

#[rstest]
#[actix_web::test]
async fn valid_submission_opens_ticket(harness: Harness) {
    let (status, correlation, body) = submit(
        &harness,
        json!({
            "subject": "Cannot login to portal",
            "description": "I cannot login since yesterday. Please investigate.",
            "priority": "HIGH",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(correlation.is_some());
    assert_eq!(body["status"], "OPEN");
    let number: TicketNumber = body["ticketNumber"]
        .as_str()
        .expect("ticket number string")
        .parse()
        .expect("well-formed ticket number");
    assert_eq!(number.year(), Utc::now().year());
    assert_eq!(number.sequence(), 1);
    assert_eq!(harness.stored(), 1);
}

#[rstest]
#[actix_web::test]
async fn short_fields_are_rejected_without_side_effects(harness: Harness) {
    let (status, correlation, body) = submit(
        &harness,
        json!({"subject": "abc", "description": "short", "priority": "HIGH"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["correlationId"].as_str(), correlation.as_deref());
    let fields: Vec<&str> = body["fieldErrors"]
        .as_array()
        .expect("field errors")
        .iter()
        .filter_map(|item| item["field"].as_str())
        .collect();
    assert_eq!(fields, ["subject", "description"]);
    assert_eq!(harness.stored(), 0);
    assert_eq!(harness.allocator.allocate_next().await, Ok(1));
}

#[rstest]
#[actix_web::test]
async fn unknown_priority_is_rejected_without_side_effects(harness: Harness) {
    let (status, _, body) = submit(
        &harness,
        json!({
            "subject": "Cannot login to portal",
            "description": "I cannot login since yesterday. Please investigate.",
            "priority": "INVALID",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["message"], "priority must be one of LOW, MEDIUM, HIGH");
    assert_eq!(harness.stored(), 0);
    assert_eq!(harness.allocator.allocate_next().await, Ok(1));
}

#[rstest]
#[case("high")]
#[case("Medium")]
#[actix_web::test]
async fn priority_matching_is_case_sensitive(harness: Harness, #[case] priority: &str) {
    let (status, _, body) = submit(
        &harness,
        json!({
            "subject": "Cannot login to portal",
            "description": "I cannot login since yesterday. Please investigate.",
            "priority": priority,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
