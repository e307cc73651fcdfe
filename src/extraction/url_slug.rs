// src/extraction/url_slug.rs

use crate::extraction::rules::{compile, loaded, FieldError};
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    // /homedetails/123-Main-St-Springfield-IL-62704/12345678_zpid/
    static ref LISTING_PATH: Result<Regex, FieldError> = compile(
        "address",
        r"/(?P<slug>[^/]+)-(?P<state>[A-Za-z]{2})-(?P<zip>\d{5})/(?P<id>\d+)_[A-Za-z]*id\b",
    );
}

/// Tokens that end a street name rather than start a city.
const STREET_SUFFIXES: &[&str] = &[
    "st", "street", "ave", "avenue", "rd", "road", "dr", "drive", "ln", "lane", "blvd", "ct",
    "court", "way", "pl", "place", "cir", "circle", "ter", "terrace", "pkwy", "hwy", "trl", "sq",
    "loop", "n", "s", "e", "w", "ne", "nw", "se", "sw", "unit", "apt",
];

/// What the listing URL alone tells us.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSlug {
    pub address: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub city_guess: Option<String>,
    pub listing_id: Option<String>,
}

/// Reads address, state and ZIP out of a canonical listing URL.
///
/// A URL that doesn't follow the slug grammar yields an empty result.
pub fn parse_listing_url(url: &str) -> Result<ListingSlug, FieldError> {
    let pattern = loaded(&LISTING_PATH)?;

    let path = Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string());

    let Some(caps) = pattern.captures(&path) else {
        return Ok(ListingSlug::default());
    };

    let address = caps["slug"].replace('-', " ");
    let city_guess = guess_city(&address);

    Ok(ListingSlug {
        state: Some(caps["state"].to_ascii_uppercase()),
        zip_code: Some(caps["zip"].to_string()),
        listing_id: Some(caps["id"].to_string()),
        city_guess,
        address: Some(address),
    })
}

/// The slug runs the city into the street address ("123 Main St Springfield").
/// With more than three tokens, the trailing one or two alphabetic tokens are
/// taken as the city; a street suffix or number before the last token limits
/// the guess to one token.
fn guess_city(address: &str) -> Option<String> {
    let tokens: Vec<&str> = address.split_whitespace().collect();
    if tokens.len() <= 3 {
        return None;
    }

    let last = tokens[tokens.len() - 1];
    if !is_alphabetic(last) {
        return None;
    }

    let prev = tokens[tokens.len() - 2];
    let prev_is_street = STREET_SUFFIXES.contains(&prev.to_ascii_lowercase().as_str());

    if is_alphabetic(prev) && !prev_is_street && tokens.len() > 4 {
        Some(format!("{prev} {last}"))
    } else {
        Some(last.to_string())
    }
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
