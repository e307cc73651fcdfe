mod models;
mod scraper;
mod scraper_error;

pub use models::ScrapeOptions;
pub use self::scraper::{FirecrawlScraper, PageFetcher};
pub use scraper_error::ScraperError;
