// responses/cors.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const ALLOW_METHODS: &str = "POST, GET, OPTIONS";

/// Adds the CORS headers every response carries.
pub fn with_cors(builder: ResponseBuilder) -> ResponseBuilder {
    builder
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
}

/// Answer to any `OPTIONS` request.
pub fn preflight_response() -> ResultResp {
    with_cors(ResponseBuilder::new().status(200))
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Body::from("ok"))
        .map_err(|e| ServerError::Internal(format!("preflight response: {e}")))
}
