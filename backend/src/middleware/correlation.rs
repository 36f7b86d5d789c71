//! Middleware attaching a request-scoped correlation identifier.
//!
//! A caller-supplied `X-Correlation-Id` header is reused when it is a usable
//! identifier (see [`CorrelationId`]'s `FromStr`); otherwise a fresh UUID is
//! generated. The identifier is placed in task-local storage for the rest of
//! the request, recorded on a request span, and echoed on the response.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, debug, error, info_span};

use crate::domain::{CORRELATION_ID_HEADER, CorrelationId};

/// Resolve the identifier for a request from its inbound header, if usable.
fn resolve_correlation_id(req: &ServiceRequest) -> CorrelationId {
    let Some(raw) = req.headers().get(CORRELATION_ID_HEADER) else {
        return CorrelationId::generate();
    };
    match raw.to_str().map(str::parse::<CorrelationId>) {
        Ok(Ok(id)) => id,
        Ok(Err(reason)) => {
            debug!(%reason, "ignoring inbound correlation id");
            CorrelationId::generate()
        }
        Err(_) => {
            debug!("ignoring non-ASCII inbound correlation id");
            CorrelationId::generate()
        }
    }
}

/// Correlation middleware adding an `X-Correlation-Id` header to every
/// response.
///
/// Handlers can read the identifier via [`CorrelationId::current`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use support_tickets::Correlation;
///
/// let app = App::new().wrap(Correlation);
/// ```
#[derive(Clone)]
pub struct Correlation;

impl<S, B> Transform<S, ServiceRequest> for Correlation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CorrelationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorrelationMiddleware { service }))
    }
}

/// Service wrapper produced by [`Correlation`].
///
/// Applications should not use this type directly.
pub struct CorrelationMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CorrelationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let correlation_id = resolve_correlation_id(&req);
        let span = info_span!(
            "request",
            correlation_id = %correlation_id,
            method = %req.method(),
            path = %req.path()
        );
        let header_value = correlation_id.to_string();
        let fut = CorrelationId::scope(correlation_id, self.service.call(req));
        Box::pin(
            async move {
                let mut res = fut.await?;
                match HeaderValue::from_str(&header_value) {
                    Ok(value) => {
                        res.response_mut()
                            .headers_mut()
                            .insert(HeaderName::from_static(CORRELATION_ID_HEADER), value);
                    }
                    Err(error) => {
                        error!(%error, "failed to encode correlation identifier header");
                    }
                }
                Ok(res)
            }
            .instrument(span),
        )
    }
}
