use crate::errors::ServerError;
use crate::responses::cors::with_cors;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

/// Convert a ServerError into the JSON failure envelope.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    match &err {
        ServerError::Internal(detail) => tracing::error!(%detail, "internal error"),
        ServerError::Upstream(source) => tracing::error!(error = %source, "scrape failed"),
        other => tracing::info!(status, error = %other, "request rejected"),
    }

    let body = json!({ "success": false, "error": err.to_string() }).to_string();

    with_cors(ResponseBuilder::new().status(status))
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
