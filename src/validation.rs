//! Per-field validation rules for book drafts

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{BookDraft, BookField};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const ISBN_MESSAGE: &str = "ISBN must be in format XXX-XXXXXXXXXX";
pub const YEAR_REQUIRED_MESSAGE: &str = "Year is required";
pub const YEAR_FORMAT_MESSAGE: &str = "Year must have four digits";

// ASCII digits only; `\d` would also accept other Unicode digits
static ISBN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{10}$").expect("valid ISBN pattern"));
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("valid year pattern"));

/// Validation rule attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank text
    Required,
    /// Non-blank, four ASCII digits
    Year,
    /// Non-blank, `DDD-DDDDDDDDDD`
    Isbn,
}

/// Rule table consulted for every field change and on submit
pub const FIELD_RULES: [(BookField, Rule); 5] = [
    (BookField::Title, Rule::Required),
    (BookField::Isbn, Rule::Isbn),
    (BookField::PublishedYear, Rule::Year),
    (BookField::Author, Rule::Required),
    (BookField::Description, Rule::Required),
];

pub fn rule_for(field: BookField) -> Rule {
    FIELD_RULES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, rule)| *rule)
        .unwrap_or(Rule::Required)
}

pub fn is_valid_isbn(isbn: &str) -> bool {
    ISBN_PATTERN.is_match(isbn)
}

impl Rule {
    /// Error message for `value`, or `None` when it passes
    pub fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Rule::Required => value.trim().is_empty().then_some(REQUIRED_MESSAGE),
            Rule::Year => {
                if value.trim().is_empty() {
                    Some(YEAR_REQUIRED_MESSAGE)
                } else if !YEAR_PATTERN.is_match(value) {
                    Some(YEAR_FORMAT_MESSAGE)
                } else {
                    None
                }
            }
            Rule::Isbn => {
                if value.trim().is_empty() {
                    Some(REQUIRED_MESSAGE)
                } else if !is_valid_isbn(value) {
                    Some(ISBN_MESSAGE)
                } else {
                    None
                }
            }
        }
    }
}

pub fn validate_field(field: BookField, value: &str) -> Option<&'static str> {
    rule_for(field).check(value)
}

/// Inline error messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<BookField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: BookField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Record the outcome of validating one field
    pub fn set(&mut self, field: BookField, error: Option<&'static str>) {
        match error {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Validate every field of the draft at once
pub fn validate_draft(draft: &BookDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for (field, rule) in FIELD_RULES.iter() {
        errors.set(*field, rule.check(draft.get(*field)));
    }
    errors
}
