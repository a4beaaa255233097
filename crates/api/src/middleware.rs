//! Request middleware.
//!
//! - [`route_plain_options`] -- Sends `OPTIONS` requests that are not CORS
//!   preflights past the CORS layer to the task router.

use axum::extract::{Request, State};
use axum::http::header::{ACCESS_CONTROL_REQUEST_METHOD, ORIGIN};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

/// Whether the request is a CORS preflight.
///
/// A preflight is an `OPTIONS` request carrying both `Origin` and
/// `Access-Control-Request-Method`.
pub fn is_preflight(req: &Request) -> bool {
    req.method() == Method::OPTIONS
        && req.headers().contains_key(ORIGIN)
        && req.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}

/// Answer plain `OPTIONS` requests from `app` (the router without CORS).
///
/// `CorsLayer` answers every `OPTIONS` request itself with 200.
pub async fn route_plain_options(
    State(app): State<Router>,
    req: Request,
    next: Next,
) -> Response {
    if req.method() != Method::OPTIONS || is_preflight(&req) {
        return next.run(req).await;
    }

    match app.oneshot(req).await {
        Ok(response) => response,
        Err(never) => match never {},
    }
}
