// scraper.rs
use crate::domain::RawScrapePayload;
use crate::scraper::models::{ScrapeOptions, ScrapeRequest, ScrapeResponse};
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("listing_scraper/", env!("CARGO_PKG_VERSION"));

/// Upstream error bodies are cut to this many characters before being surfaced.
const MAX_ERROR_BODY: usize = 500;

/// Fetches the rendered text and raw markup for one listing page.
pub trait PageFetcher: Send + Sync {
    fn fetch_page(&self, url: &str) -> Result<RawScrapePayload, ScraperError>;
}

/// Client for a Firecrawl-compatible `/scrape` endpoint.
pub struct FirecrawlScraper {
    client: Client,
    api_url: String,
    api_key: String,
    options: ScrapeOptions,
}

impl FirecrawlScraper {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
        options: ScrapeOptions,
    ) -> Result<Self, ScraperError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ScraperError::Config("scrape provider API key is empty".into()));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key,
            options,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/scrape", self.api_url.trim_end_matches('/'))
    }
}

impl PageFetcher for FirecrawlScraper {
    /// One request, no retries. The caller's timeout bounds the whole call.
    fn fetch_page(&self, url: &str) -> Result<RawScrapePayload, ScraperError> {
        let start = Instant::now();

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&ScrapeRequest::for_listing(url, &self.options))
            .send()?;

        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            tracing::warn!(
                %url,
                status = status.as_u16(),
                elapsed = ?start.elapsed(),
                "scrape provider returned an error status"
            );
            return Err(ScraperError::Upstream {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let payload = payload_from_response(url, &body)?;
        tracing::info!(
            %url,
            text_bytes = payload.text_content.len(),
            markup_bytes = payload.markup.len(),
            elapsed = ?start.elapsed(),
            "scrape complete"
        );
        Ok(payload)
    }
}

/// Turns a 2xx provider body into the extraction input.
///
/// Missing `markdown` or `rawHtml` become empty strings; only a reported
/// failure or a missing `data` object is an error.
pub fn payload_from_response(url: &str, body: &str) -> Result<RawScrapePayload, ScraperError> {
    let parsed: ScrapeResponse =
        serde_json::from_str(body).map_err(|e| ScraperError::Deserialize(e.to_string()))?;

    if !parsed.success {
        return Err(ScraperError::Provider(
            parsed
                .error
                .unwrap_or_else(|| "provider gave no error detail".to_string()),
        ));
    }

    let data = parsed
        .data
        .ok_or_else(|| ScraperError::UnexpectedShape("response has no data".to_string()))?;

    if let Some(meta) = &data.metadata {
        tracing::debug!(
            source_url = meta.source_url.as_deref().unwrap_or("<none>"),
            status = meta.status_code,
            title = meta.title.as_deref().unwrap_or(""),
            "provider page metadata"
        );
    }

    Ok(RawScrapePayload::new(
        url,
        data.markdown.unwrap_or_default(),
        data.raw_html.unwrap_or_default(),
    ))
}

fn truncate(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraper_for(server: &mockito::ServerGuard) -> FirecrawlScraper {
        FirecrawlScraper::new(
            server.url(),
            "test-key",
            Duration::from_secs(5),
            ScrapeOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn fetch_page_returns_text_and_markup() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/scrape")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"data":{"markdown":"3 bd","rawHtml":"<p>3 bd</p>"}}"#)
            .create();

        let payload = scraper_for(&server)
            .fetch_page("https://www.zillow.com/homedetails/x/1_zpid/")
            .unwrap();

        mock.assert();
        assert_eq!(payload.source_url, "https://www.zillow.com/homedetails/x/1_zpid/");
        assert_eq!(payload.text_content, "3 bd");
        assert_eq!(payload.markup, "<p>3 bd</p>");
    }

    #[test]
    fn non_success_status_is_upstream_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/scrape")
            .with_status(402)
            .with_body(r#"{"success":false,"error":"Payment required"}"#)
            .create();

        let err = scraper_for(&server).fetch_page("https://x.test").unwrap_err();

        match err {
            ScraperError::Upstream { status, body } => {
                assert_eq!(status, 402);
                assert!(body.contains("Payment required"));
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[test]
    fn reported_failure_is_provider_error() {
        let err = payload_from_response("u", r#"{"success":false,"error":"blocked"}"#).unwrap_err();
        assert!(matches!(err, ScraperError::Provider(ref m) if m == "blocked"));
    }

    #[test]
    fn missing_data_and_bad_json() {
        assert!(matches!(
            payload_from_response("u", r#"{"success":true}"#),
            Err(ScraperError::UnexpectedShape(_))
        ));
        assert!(matches!(
            payload_from_response("u", "<html>"),
            Err(ScraperError::Deserialize(_))
        ));
    }

    #[test]
    fn absent_formats_become_empty_strings() {
        let payload = payload_from_response("u", r#"{"success":true,"data":{}}"#).unwrap();
        assert_eq!(payload, RawScrapePayload::new("u", "", ""));
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let result = FirecrawlScraper::new(
            "https://api.test",
            "  ",
            Duration::from_secs(1),
            ScrapeOptions::default(),
        );
        assert!(matches!(result, Err(ScraperError::Config(_))));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé…");
        assert_eq!(truncate("short", 10), "short");
    }
}
