// src/extraction/money.rs

use crate::domain::Finding;
use crate::extraction::bounds;
use crate::extraction::rules::{compile, loaded, parse_grouped, FieldError, FieldResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DOLLAR_AMOUNT: Result<Regex, FieldError> =
        compile("estimatedValue", r"\$\s?(\d{1,3}(?:,\d{3})+|\d+)");

    // "Rent Zestimate: $2,200/mo", "rental estimate of $1,950"
    static ref RENT_NEAR_AMOUNT: Result<Regex, FieldError> = compile(
        "rentEstimate",
        r"(?i)\brent(?:al)?\b[^$]{0,80}\$\s?(\d{1,3}(?:,\d{3})+|\d+)",
    );
}

/// Every `$` amount of at least $1,000 in the corpus, largest first.
pub fn monetary_tokens(corpus: &str) -> Result<Vec<u64>, FieldError> {
    let pattern = loaded(&DOLLAR_AMOUNT)?;

    let mut tokens: Vec<u64> = pattern
        .captures_iter(corpus)
        .filter_map(|caps| parse_grouped(caps.get(1)?.as_str()))
        .filter(|amount| *amount >= bounds::MIN_MONETARY_TOKEN)
        .collect();

    tokens.sort_unstable_by(|a, b| b.cmp(a));
    Ok(tokens)
}

/// The largest amount in the property-value band. A sale price or valuation
/// is expected to dominate every other dollar figure on a listing page.
pub fn estimate_value(tokens: &[u64]) -> Option<Finding<u64>> {
    tokens
        .iter()
        .copied()
        .filter(|t| bounds::PROPERTY_VALUE.contains(t))
        .max()
        .map(Finding::fallback)
}

/// Monthly rent: an in-band amount close to "rent"/"rental" wins; failing
/// that, the smallest in-band amount so a sale price is never mistaken for rent.
/// Either way the amount must clear the monetary token floor.
pub fn estimate_rent(corpus: &str, tokens: &[u64]) -> FieldResult<Finding<u64>> {
    let pattern = loaded(&RENT_NEAR_AMOUNT)?;

    let near_keyword = pattern
        .captures_iter(corpus)
        .filter_map(|caps| parse_grouped(caps.get(1)?.as_str()))
        .filter(|amount| *amount >= bounds::MIN_MONETARY_TOKEN)
        .find(|amount| bounds::MONTHLY_RENT.contains(amount));

    if let Some(rent) = near_keyword {
        return Ok(Some(Finding::keyword(rent)));
    }

    Ok(tokens
        .iter()
        .copied()
        .filter(|t| bounds::MONTHLY_RENT.contains(t))
        .min()
        .map(Finding::fallback))
}
