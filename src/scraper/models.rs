use serde::{Deserialize, Serialize};

/// Tag filtering and render wait sent with every scrape request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub wait_for_ms: u64,
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            include_tags: tags(&[
                "main",
                "article",
                "section",
                "h1",
                "img",
                "script[type=\"application/ld+json\"]",
            ]),
            exclude_tags: tags(&["nav", "footer", "header", "aside", "iframe", "noscript"]),
            wait_for_ms: 2000,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequest {
    pub url: String,
    pub formats: Vec<&'static str>,
    pub only_main_content: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_tags: Vec<String>,
    pub wait_for: u64,
}

impl ScrapeRequest {
    /// Asks for both rendered text and raw markup of one page.
    pub fn for_listing(url: &str, options: &ScrapeOptions) -> Self {
        Self {
            url: url.to_string(),
            formats: vec!["markdown", "rawHtml"],
            only_main_content: false,
            include_tags: options.include_tags.clone(),
            exclude_tags: options.exclude_tags.clone(),
            wait_for: options.wait_for_ms,
        }
    }
}

// response
//  ├── success
//  ├── error
//  └── data
//       ├── markdown
//       ├── rawHtml
//       └── metadata
//            ├── sourceURL
//            └── statusCode

#[derive(Debug, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
    pub data: Option<ScrapeData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeData {
    pub markdown: Option<String>,
    pub raw_html: Option<String>,
    pub metadata: Option<PageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct PageMetadata {
    pub title: Option<String>,
    #[serde(rename = "sourceURL")]
    pub source_url: Option<String>,
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
}
