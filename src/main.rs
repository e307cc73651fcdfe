use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::scraper::FirecrawlScraper;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod extraction;
mod responses;
mod router;
mod scraper;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listing_scraper=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let scraper = match FirecrawlScraper::new(
        config.firecrawl_api_url.clone(),
        config.firecrawl_api_key.clone(),
        config.scrape_timeout,
        config.scrape_options.clone(),
    ) {
        Ok(scraper) => scraper,
        Err(e) => {
            tracing::error!(error = %e, "could not build scrape client");
            std::process::exit(1);
        }
    };

    tracing::info!(
        addr = %config.bind_addr,
        workers = config.max_workers,
        provider = %config.firecrawl_api_url,
        "starting listing scraper"
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &scraper) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
