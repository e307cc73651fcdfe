// src/extraction/markup.rs

use scraper::{Html, Selector};
use serde_json::Value;

/// schema.org `PostalAddress` fields pulled out of the page's JSON-LD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredAddress {
    pub street_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
}

impl StructuredAddress {
    pub fn from_markup(markup: &str) -> Self {
        let blocks = json_ld_blocks(markup);
        let first = |key: &str| blocks.iter().find_map(|block| find_string(block, key));

        Self {
            street_address: first("streetAddress"),
            locality: first("addressLocality"),
            region: first("addressRegion"),
            postal_code: first("postalCode"),
        }
    }
}

/// Every `<script type="application/ld+json">` block that parses as JSON.
pub fn json_ld_blocks(markup: &str) -> Vec<Value> {
    // Skip building a DOM for pages that carry no JSON-LD at all.
    if !markup.contains("application/ld+json") {
        return Vec::new();
    }

    let selector = match Selector::parse(r#"script[type="application/ld+json"]"#) {
        Ok(selector) => selector,
        Err(e) => {
            tracing::warn!("JSON-LD selector rejected: {e}");
            return Vec::new();
        }
    };

    let document = Html::parse_document(markup);
    document
        .select(&selector)
        .filter_map(|element| {
            let text: String = element.text().collect();
            serde_json::from_str(text.trim()).ok()
        })
        .collect()
}

/// Depth-first search for the first non-empty value stored under `key`.
/// Numbers are accepted too, since postal codes are sometimes emitted unquoted.
pub fn find_string(value: &Value, key: &str) -> Option<String> {
    match value {
        Value::Object(map) => {
            let direct = map.get(key).and_then(|v| match v {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });
            direct.or_else(|| map.values().find_map(|v| find_string(v, key)))
        }
        Value::Array(items) => items.iter().find_map(|v| find_string(v, key)),
        _ => None,
    }
}
