//! Domain primitives, aggregates and services.
//!
//! Purpose: define the support ticket model and the creation use case
//! independently of HTTP and storage. Inbound adapters call the driving
//! ports in [`ports`]; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Ticket and its value types (`TicketNumber`, `Priority`, ...).
//! - TicketService: implementation of the `TicketCommand` port.
//! - CorrelationId: request-scoped identifier carried into errors and logs.

pub mod correlation_id;
pub mod error;
pub mod ports;
pub mod ticket;
mod ticket_service;

pub use self::correlation_id::{
    CORRELATION_ID_HEADER, CORRELATION_ID_MAX_LEN, CorrelationId, CorrelationIdError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, FieldError};
pub use self::ticket::{
    PRIORITY_ERROR_MESSAGE, ParsePriorityError, Priority, Ticket, TicketDescription, TicketDraft,
    TicketFieldError, TicketNumber, TicketNumberParseError, TicketStatus, TicketSubject,
    TicketSubmission,
};
pub use self::ticket_service::TicketService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use support_tickets::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::conflict("ticket number already assigned"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
