mod routing_tests;
mod scrape_tests;
