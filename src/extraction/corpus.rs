// src/extraction/corpus.rs

const SEPARATOR: &str = "\n\n";

/// Joins rendered text and raw markup into a single search surface.
/// Empty parts are skipped, so two empty inputs give an empty corpus.
pub fn assemble_corpus(text_content: &str, markup: &str) -> String {
    [text_content, markup]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// The immutable search surface handed to every extractor.
///
/// Most extractors scan the combined text; a few (images, embedded
/// JSON locality) only make sense against the raw markup.
#[derive(Debug, Clone)]
pub struct Corpus<'a> {
    combined: String,
    markup: &'a str,
}

impl<'a> Corpus<'a> {
    pub fn assemble(text_content: &str, markup: &'a str) -> Self {
        Self {
            combined: assemble_corpus(text_content, markup),
            markup,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.combined
    }

    pub fn markup(&self) -> &'a str {
        self.markup
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }
}
