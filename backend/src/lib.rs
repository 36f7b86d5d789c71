//! Support ticket intake service.
//!
//! Accepts ticket submissions over HTTP, validates them, assigns a
//! sequential `TCK-<year>-<sequence>` number and persists the ticket.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::CorrelationId;
pub use middleware::Correlation;
