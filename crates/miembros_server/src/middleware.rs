//! HTTP access logging.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use log::{info, warn};

use crate::api::REQUEST_ID_HEADER;

/// Logs method, path, status and latency for every request.
///
/// Bodies are never logged; they carry member names and emails.
pub async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = started_at.elapsed().as_millis();
    if status.is_server_error() {
        warn!(
            "event=http_request module=http status=error method={method} path={path} http_status={} request_id={request_id} duration_ms={duration_ms}",
            status.as_u16()
        );
    } else {
        info!(
            "event=http_request module=http status=ok method={method} path={path} http_status={} request_id={request_id} duration_ms={duration_ms}",
            status.as_u16()
        );
    }

    response
}
