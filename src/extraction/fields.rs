// src/extraction/fields.rs
//
// Bedrooms, bathrooms and living area. Each field is an ordered pattern
// table: embedded JSON keys first, then labelled prose phrasings.

use crate::domain::Finding;
use crate::extraction::bounds;
use crate::extraction::rules::{decimal, loaded, whole_number, FieldError, FieldResult, FieldRules};
use lazy_static::lazy_static;

lazy_static! {
    static ref BEDROOMS: Result<FieldRules<u32>, FieldError> = bedroom_rules();
    static ref BATHROOMS: Result<FieldRules<f64>, FieldError> = bathroom_rules();
    static ref SQUARE_FEET: Result<FieldRules<u32>, FieldError> = square_feet_rules();
}

fn bedroom_rules() -> Result<FieldRules<u32>, FieldError> {
    FieldRules::<u32>::new("bedrooms", |n: &u32| bounds::BEDROOMS.contains(n))
        .rule(r#""bedrooms"\s*:\s*(\d+)"#, whole_number)?
        .rule(r"(?i)\b(\d+)\s*(?:bd|beds?|bedrooms?)\b", whole_number)?
        .rule(r"(?i)\bbed(?:room)?s?[:\s]*(\d+)", whole_number)?
        .rule(r"\b(\d+)\s*BR\b", whole_number)
}

fn bathroom_rules() -> Result<FieldRules<f64>, FieldError> {
    FieldRules::<f64>::new("bathrooms", |n: &f64| bounds::BATHROOMS.contains(n))
        .rule(r#""bathrooms"\s*:\s*(\d+(?:\.\d+)?)"#, decimal)?
        .rule(r"(?i)\b(\d+(?:\.\d+)?)\s*(?:ba|baths?|bathrooms?)\b", decimal)?
        .rule(r"(?i)\bbath(?:room)?s?[:\s]*(\d+(?:\.\d+)?)", decimal)
}

fn square_feet_rules() -> Result<FieldRules<u32>, FieldError> {
    FieldRules::<u32>::new("squareFeet", |n: &u32| bounds::SQUARE_FEET.contains(n))
        .rule(r#""livingArea"\s*:\s*(\d+)"#, whole_number)?
        .rule(
            r"(?i)(?P<reject_prefix>\blot\s*(?:size|area)?[:\s]*)?\b(?P<value>\d{1,3}(?:,\d{3})+|\d+)\s*(?:sq\.?\s*ft\.?|sqft|square\s+f(?:ee|oo)t)(?P<reject>\s*lot)?",
            whole_number,
        )?
        .rule(
            r"(?i)\b(?:living\s+area|square\s+feet|sq\.?\s*ft\.?|sqft)[:\s]*(\d{1,3}(?:,\d{3})+|\d+)",
            whole_number,
        )
}

pub fn extract_bedrooms(corpus: &str) -> FieldResult<Finding<u32>> {
    Ok(loaded(&BEDROOMS)?.first_match(corpus).map(Finding::keyword))
}

pub fn extract_bathrooms(corpus: &str) -> FieldResult<Finding<f64>> {
    Ok(loaded(&BATHROOMS)?.first_match(corpus).map(Finding::keyword))
}

pub fn extract_square_feet(corpus: &str) -> FieldResult<Finding<u32>> {
    Ok(loaded(&SQUARE_FEET)?.first_match(corpus).map(Finding::keyword))
}
