// src/extraction/rules.rs

use regex::{Captures, Match, Regex};
use thiserror::Error;

/// Failure confined to a single output field. The orchestrator logs it and
/// leaves that field null; every other field is still extracted.
#[derive(Debug, Clone, Error)]
pub enum FieldError {
    #[error("pattern for `{field}` failed to compile: {source}")]
    Pattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

pub type FieldResult<T> = Result<Option<T>, FieldError>;

/// Turns one regex match into a candidate value, or `None` if it can't be parsed.
pub type Transform<T> = fn(&Captures<'_>) -> Option<T>;

pub fn compile(field: &'static str, pattern: &str) -> Result<Regex, FieldError> {
    Regex::new(pattern).map_err(|source| FieldError::Pattern { field, source })
}

/// Borrow a lazily compiled table, turning a build failure into this field's error.
pub fn loaded<T>(table: &Result<T, FieldError>) -> Result<&T, FieldError> {
    table.as_ref().map_err(Clone::clone)
}

pub struct PatternRule<T> {
    pub pattern: Regex,
    pub transform: Transform<T>,
}

/// An ordered pattern table for one field.
///
/// Rules are tried in order, and within a rule matches are tried left to
/// right. The first transformed value the validator accepts wins.
pub struct FieldRules<T> {
    pub field: &'static str,
    pub rules: Vec<PatternRule<T>>,
    pub validator: fn(&T) -> bool,
}

impl<T> FieldRules<T> {
    pub fn new(field: &'static str, validator: fn(&T) -> bool) -> Self {
        Self {
            field,
            rules: Vec::new(),
            validator,
        }
    }

    pub fn rule(mut self, pattern: &str, transform: Transform<T>) -> Result<Self, FieldError> {
        self.rules.push(PatternRule {
            pattern: compile(self.field, pattern)?,
            transform,
        });
        Ok(self)
    }

    pub fn first_match(&self, haystack: &str) -> Option<T> {
        self.rules.iter().find_map(|rule| {
            rule.pattern
                .captures_iter(haystack)
                .filter_map(|caps| (rule.transform)(&caps))
                .find(|value| (self.validator)(value))
        })
    }
}

/// Parses "1,850" or "1850". Anything that overflows is not a candidate.
pub fn parse_grouped(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    digits.parse().ok()
}

/// Matches carrying a `reject` or `reject_prefix` group (e.g. "sq ft lot" or
/// "Lot size: 7,405 sq ft" when reading living area) are skipped.
fn rejected(caps: &Captures<'_>) -> bool {
    caps.name("reject").is_some() || caps.name("reject_prefix").is_some()
}

/// The `value` group when the pattern names one, else group 1.
fn value_group<'h>(caps: &Captures<'h>) -> Option<Match<'h>> {
    caps.name("value").or_else(|| caps.get(1))
}

/// The value group as a whole number.
pub fn whole_number<T: TryFrom<u64>>(caps: &Captures<'_>) -> Option<T> {
    if rejected(caps) {
        return None;
    }
    let n = parse_grouped(value_group(caps)?.as_str())?;
    T::try_from(n).ok()
}

/// The value group as a decimal ("2.5", "3").
pub fn decimal(caps: &Captures<'_>) -> Option<f64> {
    if rejected(caps) {
        return None;
    }
    let raw: String = value_group(caps)?.as_str().chars().filter(|c| *c != ',').collect();
    raw.parse().ok().filter(|n: &f64| n.is_finite())
}
