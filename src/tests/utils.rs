use crate::domain::RawScrapePayload;
use crate::errors::ResultResp;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::scraper::{PageFetcher, ScraperError};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::Mutex;

/// Canned `PageFetcher` that records the URLs it was asked for.
pub struct StubFetcher {
    outcome: Result<RawScrapePayload, fn() -> ScraperError>,
    pub requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn returning(text: &str, markup: &str) -> Self {
        Self {
            outcome: Ok(RawScrapePayload::new("", text, markup)),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(make_error: fn() -> ScraperError) -> Self {
        Self {
            outcome: Err(make_error),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl PageFetcher for StubFetcher {
    fn fetch_page(&self, url: &str) -> Result<RawScrapePayload, ScraperError> {
        self.requested.lock().unwrap().push(url.to_string());
        match &self.outcome {
            Ok(payload) => Ok(RawScrapePayload {
                source_url: url.to_string(),
                ..payload.clone()
            }),
            Err(make_error) => Err(make_error()),
        }
    }
}

pub fn post_json(uri: &str, body: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

pub fn request(method: Method, uri: &str) -> astra::Request {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Same path the server takes: errors become JSON envelopes.
pub fn serve(req: astra::Request, fetcher: &StubFetcher) -> Response {
    let result: ResultResp = handle(req, fetcher);
    result.unwrap_or_else(error_to_response)
}

pub fn body_json(resp: Response) -> serde_json::Value {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    serde_json::from_str(&body).unwrap()
}
