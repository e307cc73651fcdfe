use crate::errors::{ResultResp, ServerError};
use crate::responses::cors::with_cors;
use astra::{Body, ResponseBuilder};
use serde::Serialize;
use serde_json::json;

pub fn json_response<T: Serialize + ?Sized>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value)
        .map_err(|e| ServerError::Internal(format!("serialize response: {e}")))?;

    with_cors(ResponseBuilder::new().status(status))
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .map_err(|e| ServerError::Internal(format!("build response: {e}")))
}

/// `{ "success": true, "<key>": value }` with status 200.
pub fn success_response<T: Serialize>(key: &str, value: &T) -> ResultResp {
    let mut envelope = serde_json::Map::new();
    envelope.insert("success".to_string(), json!(true));
    envelope.insert(
        key.to_string(),
        serde_json::to_value(value)
            .map_err(|e| ServerError::Internal(format!("serialize {key}: {e}")))?,
    );
    json_response(200, &envelope)
}
