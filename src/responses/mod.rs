pub mod cors;
pub mod errors;
pub mod json;

pub use cors::preflight_response;
pub use errors::error_to_response;
pub use json::{json_response, success_response};
