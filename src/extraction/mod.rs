// src/extraction/mod.rs
//
// Turns one scraped listing page into an `ExtractedListing`. Every extractor
// is a pure function of the corpus; a failure in one only blanks its own
// field.

pub mod bounds;
pub mod corpus;
pub mod fields;
pub mod images;
pub mod locality;
pub mod lot_size;
pub mod markup;
pub mod money;
pub mod property_type;
pub mod rules;
pub mod url_slug;
pub mod year_built;

use crate::domain::{ExtractedListing, Finding, ListingProvenance, Provenance, RawScrapePayload};
use corpus::Corpus;
use markup::StructuredAddress;
use rules::FieldError;
use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

/// Best-effort text of a caught panic payload.
pub fn panic_message(cause: &(dyn Any + Send)) -> String {
    cause
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| cause.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Runs one extractor. A pattern failure or a panic is logged and only
/// blanks this field.
fn isolate<T>(field: &'static str, run: impl FnOnce() -> Result<T, FieldError>) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            tracing::warn!(field, error = %e, "field extraction failed, leaving it null");
            None
        }
        Err(cause) => {
            tracing::warn!(
                field,
                panic = %panic_message(cause.as_ref()),
                "field extractor panicked, leaving it null"
            );
            None
        }
    }
}

/// Records the provenance for one field and hands back its value.
fn settle<T: Debug>(
    field: &'static str,
    found: Option<Finding<T>>,
    provenance: &mut Provenance,
) -> Option<T> {
    match found {
        Some(finding) => {
            tracing::debug!(field, value = ?finding.value, provenance = ?finding.provenance, "extracted");
            *provenance = finding.provenance;
            Some(finding.value)
        }
        None => {
            tracing::debug!(field, "absent");
            *provenance = Provenance::Absent;
            None
        }
    }
}

/// Runs every extractor over the payload and assembles the record.
///
/// `current_year` bounds `year_built`; passing it in keeps the result a pure
/// function of the arguments.
pub fn extract_listing(payload: &RawScrapePayload, current_year: i32) -> ExtractedListing {
    let corpus = Corpus::assemble(&payload.text_content, &payload.markup);
    let text = corpus.as_str();
    if corpus.is_empty() {
        tracing::debug!(url = %payload.source_url, "scrape payload carried no content");
    }

    let slug = isolate("address", || url_slug::parse_listing_url(&payload.source_url))
        .unwrap_or_default();
    let structured = isolate("address", || Ok(StructuredAddress::from_markup(corpus.markup())))
        .unwrap_or_default();
    let prose = isolate("city", || locality::prose_locality(text)).flatten();

    let tokens = isolate("estimatedValue", || money::monetary_tokens(text)).unwrap_or_default();

    let mut prov = ListingProvenance::default();

    let address = settle(
        "address",
        isolate("address", || Ok(locality::extract_address(&slug, &structured))).flatten(),
        &mut prov.address,
    );
    let city = settle(
        "city",
        isolate("city", || {
            locality::extract_city(corpus.markup(), &slug, prose.as_ref(), &structured)
        })
        .flatten(),
        &mut prov.city,
    );
    let state = settle(
        "state",
        isolate("state", || {
            Ok(locality::extract_state(&slug, prose.as_ref(), &structured))
        })
        .flatten(),
        &mut prov.state,
    );
    let zip_code = settle(
        "zipCode",
        isolate("zipCode", || {
            Ok(locality::extract_zip_code(&slug, prose.as_ref(), &structured))
        })
        .flatten(),
        &mut prov.zip_code,
    );

    let bedrooms = settle(
        "bedrooms",
        isolate("bedrooms", || fields::extract_bedrooms(text)).flatten(),
        &mut prov.bedrooms,
    );
    let bathrooms = settle(
        "bathrooms",
        isolate("bathrooms", || fields::extract_bathrooms(text)).flatten(),
        &mut prov.bathrooms,
    );
    let square_feet = settle(
        "squareFeet",
        isolate("squareFeet", || fields::extract_square_feet(text)).flatten(),
        &mut prov.square_feet,
    );
    let property_type = settle(
        "propertyType",
        isolate("propertyType", || property_type::classify_property_type(text)).flatten(),
        &mut prov.property_type,
    );
    let year_built = settle(
        "yearBuilt",
        isolate("yearBuilt", || year_built::extract_year_built(text, current_year)).flatten(),
        &mut prov.year_built,
    );
    let lot_size = settle(
        "lotSize",
        isolate("lotSize", || lot_size::extract_lot_size(text)).flatten(),
        &mut prov.lot_size,
    );

    let estimated_value = settle(
        "estimatedValue",
        isolate("estimatedValue", || Ok(money::estimate_value(&tokens))).flatten(),
        &mut prov.estimated_value,
    );
    let rent_estimate = settle(
        "rentEstimate",
        isolate("rentEstimate", || money::estimate_rent(text, &tokens)).flatten(),
        &mut prov.rent_estimate,
    );

    let images = isolate("images", || images::harvest_images(corpus.markup())).unwrap_or_default();
    prov.images = if images.is_empty() {
        Provenance::Absent
    } else {
        Provenance::MatchedByKeyword
    };
    tracing::debug!(field = "images", count = images.len(), "extracted");

    ExtractedListing {
        source_url: payload.source_url.clone(),
        listing_id: slug.listing_id,
        address,
        city,
        state,
        zip_code,
        bedrooms,
        bathrooms,
        square_feet,
        property_type,
        year_built,
        lot_size,
        estimated_value,
        home_value_estimate: estimated_value,
        rent_estimate,
        monthly_rent: rent_estimate,
        images,
        provenance: prov,
    }
}
