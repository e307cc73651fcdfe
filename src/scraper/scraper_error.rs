// scraper_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Scrape provider returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Scrape provider reported failure: {0}")]
    Provider(String),

    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),

    #[error("Deserialize error: {0}")]
    Deserialize(String),

    #[error("Scraper configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ScraperError {
    fn from(err: reqwest::Error) -> Self {
        ScraperError::Network(err.to_string())
    }
}
