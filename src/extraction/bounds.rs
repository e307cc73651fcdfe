// src/extraction/bounds.rs
//
// Plausibility bands. A candidate outside its band is discarded, never clamped.

use std::ops::RangeInclusive;

pub const BEDROOMS: RangeInclusive<u32> = 1..=20;
pub const BATHROOMS: RangeInclusive<f64> = 0.5..=20.0;
pub const SQUARE_FEET: RangeInclusive<u32> = 100..=50_000;

/// Upper bound is the current calendar year, supplied by the caller.
pub const EARLIEST_YEAR_BUILT: i32 = 1800;

pub const LOT_ACRES: RangeInclusive<f64> = 0.1..=100.0;
pub const LOT_SQUARE_FEET: RangeInclusive<u64> = 1_000..=1_000_000;

/// Dollar amounts below this are fees and unit prices, not listing-level figures.
pub const MIN_MONETARY_TOKEN: u64 = 1_000;
pub const PROPERTY_VALUE: RangeInclusive<u64> = 50_000..=50_000_000;
pub const MONTHLY_RENT: RangeInclusive<u64> = 500..=20_000;

pub const MAX_IMAGES: usize = 5;

pub fn year_built(current_year: i32) -> RangeInclusive<i32> {
    EARLIEST_YEAR_BUILT..=current_year
}
