// src/extraction/locality.rs
//
// City, and the fallbacks for address/state/ZIP when the URL slug
// doesn't match. Sources in priority order: URL slug, "City, ST 12345"
// prose, then locality data embedded in the markup.

use crate::domain::Finding;
use crate::extraction::markup::StructuredAddress;
use crate::extraction::rules::{compile, loaded, FieldError, FieldResult};
use crate::extraction::url_slug::ListingSlug;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CITY_STATE_ZIP: Result<Regex, FieldError> = compile(
        "city",
        r"\b([A-Z][A-Za-z.'-]*(?:[ \t]+[A-Z][A-Za-z.'-]*){0,3}),[ \t]*([A-Z]{2})[ \t]+(\d{5})\b",
    );
    static ref EMBEDDED_CITY: Result<Regex, FieldError> = compile(
        "city",
        r#""(?:city|addressLocality)"\s*:\s*"([^"]{1,80})""#,
    );
}

/// A "Springfield, IL 62704" match from the page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProseLocality {
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Letters plus the punctuation real place names use ("St. Louis", "Coeur d'Alene").
pub fn is_place_name(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    trimmed.chars().any(char::is_alphabetic)
        && trimmed
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.'))
}

pub fn prose_locality(corpus: &str) -> FieldResult<ProseLocality> {
    let pattern = loaded(&CITY_STATE_ZIP)?;

    Ok(pattern
        .captures_iter(corpus)
        .filter(|caps| is_place_name(&caps[1]))
        .map(|caps| ProseLocality {
            city: caps[1].trim().to_string(),
            state: caps[2].to_string(),
            zip_code: caps[3].to_string(),
        })
        .next())
}

fn embedded_city(markup: &str, structured: &StructuredAddress) -> FieldResult<String> {
    if let Some(city) = structured.locality.as_deref().filter(|c| is_place_name(c)) {
        return Ok(Some(city.trim().to_string()));
    }

    let pattern = loaded(&EMBEDDED_CITY)?;
    Ok(pattern
        .captures_iter(markup)
        .map(|caps| caps[1].trim().to_string())
        .find(|city| is_place_name(city)))
}

pub fn extract_city(
    markup: &str,
    slug: &ListingSlug,
    prose: Option<&ProseLocality>,
    structured: &StructuredAddress,
) -> FieldResult<Finding<String>> {
    if let Some(guess) = slug.city_guess.as_deref().filter(|c| is_place_name(c)) {
        return Ok(Some(Finding::fallback(guess.to_string())));
    }

    if let Some(found) = prose {
        return Ok(Some(Finding::keyword(found.city.clone())));
    }

    Ok(embedded_city(markup, structured)?.map(Finding::keyword))
}

pub fn extract_address(
    slug: &ListingSlug,
    structured: &StructuredAddress,
) -> Option<Finding<String>> {
    slug.address
        .clone()
        .or_else(|| structured.street_address.clone())
        .map(Finding::keyword)
}

pub fn extract_state(
    slug: &ListingSlug,
    prose: Option<&ProseLocality>,
    structured: &StructuredAddress,
) -> Option<Finding<String>> {
    let from_markup = || {
        structured
            .region
            .as_deref()
            .map(str::trim)
            .filter(|r| r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_ascii_uppercase)
    };

    slug.state
        .clone()
        .or_else(from_markup)
        .or_else(|| prose.map(|p| p.state.clone()))
        .map(Finding::keyword)
}

pub fn extract_zip_code(
    slug: &ListingSlug,
    prose: Option<&ProseLocality>,
    structured: &StructuredAddress,
) -> Option<Finding<String>> {
    let from_markup = || {
        let code = structured.postal_code.as_deref()?.trim();
        let five: String = code.chars().take(5).collect();
        (five.len() == 5 && five.chars().all(|c| c.is_ascii_digit())).then_some(five)
    };

    slug.zip_code
        .clone()
        .or_else(from_markup)
        .or_else(|| prose.map(|p| p.zip_code.clone()))
        .map(Finding::keyword)
}
