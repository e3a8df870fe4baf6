//! HTTP surface.
//!
//! # Responsibility
//! - Route `/miembros` requests to the member handlers.
//! - Attach cross-cutting layers: request id, CORS, access logging.
//! - Optionally serve a static frontend for every other path.

use std::path::Path;

use axum::{
    http::{HeaderName, HeaderValue, Request},
    middleware, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::services::ServeDir;
use uuid::Uuid;

use crate::middleware::log_request;
use crate::state::AppState;

pub mod members;

/// Prefix shared by every member route.
pub const BASE_PATH: &str = "/miembros";

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Copy)]
struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Routes only, no layers and no state.
pub fn router() -> Router<AppState> {
    Router::new().merge(members::router())
}

/// Fully layered application bound to `state`.
pub fn build_app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut app = router();
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    app.layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, UuidRequestId))
        .with_state(state)
}
