// src/extraction/images.rs

use crate::extraction::bounds;
use crate::extraction::rules::{compile, loaded, FieldError};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Listing photos are served at this size after normalization.
pub const HIGH_RES_TOKEN: &str = "/1024_768_";

lazy_static! {
    // Both `src="…"` and lazy-loaded `data-src="…"`, in document order.
    static ref PHOTO_URL: Result<Regex, FieldError> = compile(
        "images",
        r#"(?i)\b(?:data-)?src\s*=\s*["'](https?://photos\.zillowstatic\.com/[^"'\s>]+?\.(?:jpe?g|png|webp))["']"#,
    );
    static ref DIMENSIONS: Result<Regex, FieldError> = compile("images", r"/\d+_\d+_");
}

fn is_decoration(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.contains("icon") || lower.contains("logo")
}

/// Up to five distinct listing photo URLs, upgraded to high resolution,
/// in the order they first appear in the markup.
pub fn harvest_images(markup: &str) -> Result<Vec<String>, FieldError> {
    let photo = loaded(&PHOTO_URL)?;
    let dimensions = loaded(&DIMENSIONS)?;

    let mut seen = HashSet::new();
    let mut images = Vec::new();

    for caps in photo.captures_iter(markup) {
        let url = &caps[1];
        if is_decoration(url) {
            continue;
        }

        let upgraded = dimensions.replace(url, HIGH_RES_TOKEN).into_owned();
        if seen.insert(upgraded.clone()) {
            images.push(upgraded);
        }
        if images.len() == bounds::MAX_IMAGES {
            break;
        }
    }

    Ok(images)
}
