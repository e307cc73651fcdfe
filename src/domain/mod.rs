pub mod listing;

pub use listing::{
    ExtractedListing, Finding, ListingProvenance, PropertyType, Provenance, RawScrapePayload,
};
