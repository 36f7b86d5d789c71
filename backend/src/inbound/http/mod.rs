//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod tickets;

pub use error::ApiResult;

/// Register the ticket API and health probes on an application.
///
/// Callers provide `web::Data<HttpState>` and `web::Data<HealthState>` and
/// wrap the application in [`crate::Correlation`].
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use support_tickets::Correlation;
/// use support_tickets::inbound::http::{configure, health::HealthState, state::HttpState};
///
/// fn app(state: HttpState) {
///     let _app = App::new()
///         .app_data(web::Data::new(state))
///         .app_data(web::Data::new(HealthState::new()))
///         .wrap(Correlation)
///         .configure(configure);
/// }
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(tickets::json_config())
            .service(tickets::create_ticket),
    )
    .service(health::ready)
    .service(health::live);
}
