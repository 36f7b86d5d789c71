//! Ticket intake HTTP handler.
//!
//! ```text
//! POST /api/tickets
//! ```
//!
//! The request body is checked structurally here so that every field
//! violation is reported in one response and no sequence value is consumed
//! for a rejected request. Priority values are parsed by the use case.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{Error, Ticket, TicketSubmission};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload for opening a ticket.
///
/// Every field is optional at the JSON level so that absent or `null` values
/// are reported as field errors rather than as a malformed body.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequestBody {
    /// Short headline, 5 to 120 characters.
    #[schema(example = "Login fails", min_length = 5, max_length = 120)]
    pub subject: Option<String>,
    /// Problem description, 20 to 2000 characters.
    #[schema(
        example = "Cannot log in since this morning.",
        min_length = 20,
        max_length = 2000
    )]
    pub description: Option<String>,
    /// One of `LOW`, `MEDIUM`, `HIGH`.
    #[schema(example = "HIGH")]
    pub priority: Option<String>,
}

impl From<CreateTicketRequestBody> for TicketSubmission {
    fn from(value: CreateTicketRequestBody) -> Self {
        Self {
            subject: value.subject,
            description: value.description,
            priority: value.priority,
        }
    }
}

/// Response payload for a created ticket.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketResponseBody {
    /// Allocated ticket number.
    #[schema(example = "TCK-2025-000042")]
    pub ticket_number: String,
    /// Ticket status, `OPEN` for new tickets.
    #[schema(example = "OPEN")]
    pub status: String,
}

impl From<&Ticket> for CreateTicketResponseBody {
    fn from(value: &Ticket) -> Self {
        Self {
            ticket_number: value.ticket_number().to_string(),
            status: value.status().to_string(),
        }
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejecting unreadable ticket payload");
    Error::bad_request("Malformed request body").into()
}

/// JSON extractor configuration reporting unreadable bodies as `BAD_REQUEST`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Open a support ticket.
///
/// # Examples
/// ```no_run
/// use actix_web::{HttpResponse, web};
/// use support_tickets::inbound::http::ApiResult;
/// use support_tickets::inbound::http::state::HttpState;
/// use support_tickets::inbound::http::tickets::{CreateTicketRequestBody, create_ticket};
///
/// async fn call_handler(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
///     let payload = web::Json(CreateTicketRequestBody {
///         subject: Some("Login fails".to_owned()),
///         description: Some("Cannot log in since this morning.".to_owned()),
///         priority: Some("HIGH".to_owned()),
///     });
///     create_ticket(state, payload).await
/// }
/// ```
#[utoipa::path(
    post,
    path = "/api/tickets",
    request_body = CreateTicketRequestBody,
    responses(
        (status = 201, description = "Ticket created", body = CreateTicketResponseBody),
        (status = 400, description = "Validation failed or unknown priority", body = ErrorSchema),
        (status = 409, description = "Ticket number collision", body = ErrorSchema),
        (status = 500, description = "Internal error", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "createTicket"
)]
#[post("/tickets")]
pub async fn create_ticket(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTicketRequestBody>,
) -> ApiResult<HttpResponse> {
    let request = TicketSubmission::from(payload.into_inner())
        .validate()
        .inspect_err(|err| {
            warn!(
                correlation_id = err.correlation_id().unwrap_or_default(),
                violations = err.field_errors().len(),
                "ticket rejected: validation failed"
            );
        })?;

    let ticket = state.tickets.create_ticket(request).await?;

    Ok(HttpResponse::Created().json(CreateTicketResponseBody::from(&ticket)))
}

#[cfg(test)]
#[path = "tickets_tests.rs"]
mod tests;
