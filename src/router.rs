use crate::domain::{ExtractedListing, RawScrapePayload};
use crate::errors::{ResultResp, ServerError};
use crate::extraction::{extract_listing, panic_message};
use crate::responses::{json_response, preflight_response, success_response};
use crate::scraper::PageFetcher;
use astra::Request;
use chrono::Datelike;
use serde::Deserialize;
use serde_json::json;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};

/// Request bodies beyond this are rejected before parsing.
const MAX_BODY_BYTES: u64 = 64 * 1024;

#[derive(Debug, Deserialize)]
struct ScrapePropertyRequest {
    #[serde(rename = "zillowUrl")]
    zillow_url: Option<String>,
}

pub fn handle(mut req: Request, fetcher: &dyn PageFetcher) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    tracing::info!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("OPTIONS", _) => preflight_response(),

        ("POST", "/scrape-property") | ("POST", "/") => {
            let body = read_body(&mut req)?;
            scrape_property(&body, fetcher)
        }

        ("GET", "/health") => json_response(200, &json!({ "status": "ok" })),

        (_, "/scrape-property") | (_, "/") | (_, "/health") => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Could not read request body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("Request body too large".into()));
    }
    Ok(buf)
}

fn scrape_property(body: &[u8], fetcher: &dyn PageFetcher) -> ResultResp {
    let parsed: ScrapePropertyRequest = serde_json::from_slice(body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid JSON body: {e}")))?;

    let url = parsed
        .zillow_url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ServerError::BadRequest("zillowUrl is required".into()))?;

    let payload = fetcher.fetch_page(&url)?;
    let listing = extract_guarded(&payload, chrono::Utc::now().year())?;

    tracing::info!(%url, images = listing.images.len(), "listing extracted");
    success_response("propertyData", &listing)
}

/// Runs extraction, turning a panic into a generic internal error.
fn extract_guarded(
    payload: &RawScrapePayload,
    current_year: i32,
) -> Result<ExtractedListing, ServerError> {
    panic::catch_unwind(AssertUnwindSafe(|| extract_listing(payload, current_year))).map_err(
        |cause| {
            ServerError::Internal(format!(
                "extraction panicked: {}",
                panic_message(cause.as_ref())
            ))
        },
    )
}
