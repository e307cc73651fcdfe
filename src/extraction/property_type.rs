// src/extraction/property_type.rs

use crate::domain::{Finding, PropertyType};
use crate::extraction::rules::{compile, loaded, FieldError, FieldResult};
use lazy_static::lazy_static;
use regex::Regex;

/// Checked in order; the first category with any keyword present wins.
const CATEGORIES: &[(PropertyType, &[&str])] = &[
    (
        PropertyType::SingleFamily,
        &["single family", "single-family", "single_family", "detached"],
    ),
    (
        PropertyType::Townhouse,
        &["townhouse", "townhome", "town house"],
    ),
    (PropertyType::Condo, &["condo", "condominium"]),
    (PropertyType::Apartment, &["apartment", "apt"]),
    (
        PropertyType::MultiFamily,
        &["duplex", "multi-family", "multi family", "multi_family"],
    ),
];

lazy_static! {
    static ref MATCHERS: Result<Vec<(PropertyType, Regex)>, FieldError> = CATEGORIES
        .iter()
        .map(|(kind, keywords)| -> Result<(PropertyType, Regex), FieldError> {
            Ok((*kind, compile("propertyType", &keyword_pattern(keywords))?))
        })
        .collect();
}

/// Case-insensitive alternation over the keywords, anchored at a word start
/// and tolerant of a plural ending ("condos", "duplexes").
fn keyword_pattern(keywords: &[&str]) -> String {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i)\b(?:{alternation})(?:e?s)?\b")
}

pub fn classify_property_type(corpus: &str) -> FieldResult<Finding<PropertyType>> {
    Ok(loaded(&MATCHERS)?
        .iter()
        .find(|(_, pattern)| pattern.is_match(corpus))
        .map(|(kind, _)| Finding::keyword(*kind)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(corpus: &str) -> Option<PropertyType> {
        classify_property_type(corpus).unwrap().map(|f| f.value)
    }

    #[test]
    fn recognizes_each_category() {
        assert_eq!(kind("Single Family Residence"), Some(PropertyType::SingleFamily));
        assert_eq!(kind("End-unit TOWNHOME"), Some(PropertyType::Townhouse));
        assert_eq!(kind("Downtown condominium"), Some(PropertyType::Condo));
        assert_eq!(kind("Garden apt near transit"), Some(PropertyType::Apartment));
        assert_eq!(kind("Up/down duplex"), Some(PropertyType::MultiFamily));
        assert_eq!(kind(r#""homeType":"SINGLE_FAMILY""#), Some(PropertyType::SingleFamily));
    }

    #[test]
    fn earlier_category_takes_precedence() {
        assert_eq!(
            kind("Detached home; condo fees not applicable"),
            Some(PropertyType::SingleFamily)
        );
        assert_eq!(
            kind("Townhouse style duplex"),
            Some(PropertyType::Townhouse)
        );
    }

    #[test]
    fn plural_keywords_still_match() {
        assert_eq!(kind("Condos for sale"), Some(PropertyType::Condo));
        assert_eq!(kind("New townhomes community"), Some(PropertyType::Townhouse));
        assert_eq!(kind("Luxury apartments"), Some(PropertyType::Apartment));
        assert_eq!(kind("Duplexes near campus"), Some(PropertyType::MultiFamily));
    }

    #[test]
    fn keywords_must_start_a_word() {
        assert_eq!(kind("adapted captcha chapter"), None);
        assert_eq!(kind("condor sightings"), None);
    }

    #[test]
    fn no_keywords_is_null() {
        assert_eq!(kind("lovely home with a view"), None);
    }
}
