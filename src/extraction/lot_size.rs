// src/extraction/lot_size.rs

use crate::domain::Finding;
use crate::extraction::bounds;
use crate::extraction::rules::{loaded, parse_grouped, FieldError, FieldResult, FieldRules};
use lazy_static::lazy_static;
use regex::Captures;
use std::fmt;

lazy_static! {
    static ref LOT_SIZE: Result<FieldRules<LotSize>, FieldError> = lot_size_rules();
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LotSize {
    Acres(f64),
    SquareFeet(u64),
}

impl LotSize {
    pub fn is_plausible(&self) -> bool {
        match self {
            LotSize::Acres(n) => bounds::LOT_ACRES.contains(n),
            LotSize::SquareFeet(n) => bounds::LOT_SQUARE_FEET.contains(n),
        }
    }
}

impl fmt::Display for LotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LotSize::Acres(n) => write!(f, "{n} acres"),
            LotSize::SquareFeet(n) => write!(f, "{} sq ft", group_thousands(*n)),
        }
    }
}

fn lot_size_rules() -> Result<FieldRules<LotSize>, FieldError> {
    FieldRules::<LotSize>::new("lotSize", LotSize::is_plausible)
        .rule(r"(?i)(\d*\.\d+|\d+)\s*acres?\b", acres)?
        .rule(
            r"(?i)\blot\s*size[:\s]*(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d*\.\d+|\d+)\s*(acres?|sq\.?\s*ft\.?|sqft|square\s+feet)",
            labelled,
        )?
        .rule(
            r"(?i)\b(\d{1,3}(?:,\d{3})+|\d+)\s*(?:sq\.?\s*ft\.?|sqft|square\s+feet)\s+lot\b",
            square_feet,
        )
}

fn acres(caps: &Captures<'_>) -> Option<LotSize> {
    caps.get(1)?.as_str().parse().ok().map(LotSize::Acres)
}

fn square_feet(caps: &Captures<'_>) -> Option<LotSize> {
    parse_grouped(caps.get(1)?.as_str()).map(LotSize::SquareFeet)
}

/// "Lot size: 0.25 acres" or "Lot size: 7,405 sq ft".
fn labelled(caps: &Captures<'_>) -> Option<LotSize> {
    let unit = caps.get(2)?.as_str().to_ascii_lowercase();
    if unit.starts_with("acre") {
        let raw: String = caps.get(1)?.as_str().chars().filter(|c| *c != ',').collect();
        raw.parse().ok().map(LotSize::Acres)
    } else {
        // Fractional square feet are truncated.
        let whole = caps.get(1)?.as_str().split('.').next()?;
        parse_grouped(whole).map(LotSize::SquareFeet)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Lot size normalized to `"<n> acres"` or `"<n,nnn> sq ft"`.
pub fn extract_lot_size(corpus: &str) -> FieldResult<Finding<String>> {
    Ok(loaded(&LOT_SIZE)?
        .first_match(corpus)
        .map(|lot| Finding::keyword(lot.to_string())))
}
