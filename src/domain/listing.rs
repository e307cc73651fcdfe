// src/domain/listing.rs

use serde::Serialize;
use std::fmt;

/// What the scraping provider handed back for one listing page.
/// Created once per request and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawScrapePayload {
    pub source_url: String,
    /// Rendered page text (markdown from the provider).
    pub text_content: String,
    /// Raw HTML of the page.
    pub markup: String,
}

impl RawScrapePayload {
    pub fn new(
        source_url: impl Into<String>,
        text_content: impl Into<String>,
        markup: impl Into<String>,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            text_content: text_content.into(),
            markup: markup.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    SingleFamily,
    Townhouse,
    Condo,
    Apartment,
    MultiFamily,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "single_family",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Condo => "condo",
            PropertyType::Apartment => "apartment",
            PropertyType::MultiFamily => "multi_family",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field's value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// A labelled pattern or keyword-proximity match produced the value.
    MatchedByKeyword,
    /// The value was picked by a tie-break (band max/min, oldest year, slug guess).
    FallbackHeuristic,
    #[default]
    Absent,
}

/// A value together with how it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding<T> {
    pub value: T,
    pub provenance: Provenance,
}

impl<T> Finding<T> {
    pub fn keyword(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::MatchedByKeyword,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::FallbackHeuristic,
        }
    }
}

/// Per-field provenance, mirrored one-to-one with `ExtractedListing`'s data fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingProvenance {
    pub address: Provenance,
    pub city: Provenance,
    pub state: Provenance,
    pub zip_code: Provenance,
    pub bedrooms: Provenance,
    pub bathrooms: Provenance,
    pub square_feet: Provenance,
    pub property_type: Provenance,
    pub year_built: Provenance,
    pub lot_size: Provenance,
    pub estimated_value: Provenance,
    pub rent_estimate: Provenance,
    pub images: Provenance,
}

/// The normalized record produced for one listing page.
///
/// Every numeric field is either `None` or inside its plausibility band;
/// out-of-range candidates are dropped upstream, never clamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedListing {
    pub source_url: String,
    pub listing_id: Option<String>,

    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,

    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub square_feet: Option<u32>,
    pub property_type: Option<PropertyType>,
    pub year_built: Option<i32>,
    pub lot_size: Option<String>,

    pub estimated_value: Option<u64>,
    pub home_value_estimate: Option<u64>,
    pub rent_estimate: Option<u64>,
    pub monthly_rent: Option<u64>,

    pub images: Vec<String>,

    pub provenance: ListingProvenance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_serializes_nulls_and_camel_case_keys() {
        let listing = ExtractedListing {
            source_url: "https://example.com".into(),
            ..Default::default()
        };

        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["sourceUrl"], "https://example.com");
        assert!(json["zipCode"].is_null());
        assert!(json["homeValueEstimate"].is_null());
        assert_eq!(json["images"], serde_json::json!([]));
        assert_eq!(json["provenance"]["squareFeet"], "absent");
    }

    #[test]
    fn property_type_and_provenance_wire_names() {
        assert_eq!(
            serde_json::to_value(PropertyType::MultiFamily).unwrap(),
            "multi_family"
        );
        assert_eq!(
            serde_json::to_value(Provenance::MatchedByKeyword).unwrap(),
            "matched-by-keyword"
        );
        assert_eq!(
            serde_json::to_value(Provenance::FallbackHeuristic).unwrap(),
            "fallback-heuristic"
        );
        assert_eq!(PropertyType::SingleFamily.to_string(), "single_family");
    }
}
