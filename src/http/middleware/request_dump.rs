//! Per-request debug dump.
//! Logs method, URI, version and headers of every request at debug level.

use axum::{body::Body, http::Request, middleware::Next, response::Response};

pub async fn request_dump_middleware(req: Request<Body>, next: Next) -> Response {
    tracing::debug!(
        method = %req.method(),
        uri = %req.uri(),
        version = ?req.version(),
        headers = ?req.headers(),
        "Request received"
    );
    next.run(req).await
}
