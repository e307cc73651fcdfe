// src/extraction/year_built.rs

use crate::domain::Finding;
use crate::extraction::bounds;
use crate::extraction::rules::{compile, loaded, FieldError, FieldResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YEAR_NEAR_KEYWORD: Result<Regex, FieldError> = compile(
        "yearBuilt",
        r"(?i)\b(?:year\s*built|built(?:\s+in)?|construction|constructed)\b[^0-9]{0,40}(\d{4})\b",
    );
    static ref FOUR_DIGITS: Result<Regex, FieldError> = compile("yearBuilt", r"\b(\d{4})\b");
}

/// Year of construction.
///
/// A year close to "built"/"construction" wins. Otherwise the oldest plausible
/// year anywhere in the corpus is taken, tagged as a fallback.
pub fn extract_year_built(corpus: &str, current_year: i32) -> FieldResult<Finding<i32>> {
    let plausible = bounds::year_built(current_year);
    let years = |pattern: &Regex| -> Vec<i32> {
        pattern
            .captures_iter(corpus)
            .filter_map(|caps| caps.get(1)?.as_str().parse::<i32>().ok())
            .filter(|year| plausible.contains(year))
            .collect()
    };

    if let Some(year) = years(loaded(&YEAR_NEAR_KEYWORD)?).first() {
        return Ok(Some(Finding::keyword(*year)));
    }

    Ok(years(loaded(&FOUR_DIGITS)?)
        .into_iter()
        .min()
        .map(Finding::fallback))
}
