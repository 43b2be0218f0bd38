//! Field-level validation shared by the entity drafts.
//!
//! Validators never stop at the first failure: every failing field is
//! recorded so callers can report them together.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::json;

use super::Error;

/// Message used for the error envelope when any field fails.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Accumulated field failures keyed by wire field name.
///
/// # Examples
/// ```
/// use jobdesk::domain::{ErrorCode, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// errors.add("title", "Job title must be at least 5 characters long");
/// let err: jobdesk::domain::Error = errors.into();
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    /// Empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. The first message for a field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Iterate over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Return `value` when nothing failed.
    pub fn finish<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Require a present, non-blank value.
    pub(crate) fn required<'a>(
        &mut self,
        field: &'static str,
        value: Option<&'a str>,
    ) -> Option<&'a str> {
        match value {
            Some(text) if !text.trim().is_empty() => Some(text),
            _ => {
                self.add(field, format!("{} is required", field_label(field)));
                None
            }
        }
    }

    /// Require at least `min` characters in `value` as given. Callers trim
    /// first for fields measured without surrounding whitespace.
    pub(crate) fn min_chars(&mut self, field: &'static str, value: &str, min: usize, message: &str) {
        if value.chars().count() < min {
            self.add(field, message);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        let fields: serde_json::Map<String, serde_json::Value> = errors
            .0
            .into_iter()
            .map(|(field, message)| (field.to_owned(), json!(message)))
            .collect();
        Error::invalid_request(VALIDATION_FAILED).with_details(json!({ "fields": fields }))
    }
}

fn field_label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |head| {
        head.to_uppercase().chain(chars).collect()
    })
}

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern).unwrap_or_else(|error| panic!("regex {pattern} failed to compile: {error}"))
    })
}

pub(crate) fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^[A-Za-z0-9_ ]+$")
}

pub(crate) fn client_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^[a-zA-Z0-9\s\-'.]+$")
}

pub(crate) fn strict_email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
}

pub(crate) fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"^\d{3}-\d{3}-\d{4}$")
}
