//! Shared validation helpers for inbound HTTP adapters.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use chrono::NaiveDate;
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, ValidationErrors};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidDate,
    InvalidBody,
}

impl ErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidDate => "invalid_date",
            Self::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    const fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a date formatted YYYY-MM-DD")).with_details(
        json!({
            "field": field,
            "value": value,
            "code": ErrorCode::InvalidDate.as_str(),
        }),
    )
}

/// Parse an optional ISO-8601 calendar date.
///
/// An omitted field is `None`. A field sent blank is reported as required,
/// so a PATCH cannot clear a date by accident.
pub(crate) fn parse_optional_date(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    match value.map(str::trim) {
        None => Ok(None),
        Some("") => {
            let mut errors = ValidationErrors::new();
            errors.required(field.as_str(), None);
            Err(errors.into())
        }
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| invalid_date_error(field, raw)),
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected JSON payload");
    Error::invalid_request("Request body is not valid JSON for this endpoint")
        .with_details(json!({
            "code": ErrorCode::InvalidBody.as_str(),
            "reason": err.to_string(),
        }))
        .into()
}

/// JSON extractor configuration returning the standard error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const START: FieldName = FieldName::new("start_date");

    #[test]
    fn omitted_dates_are_absent() {
        assert_eq!(parse_optional_date(None, START).expect("absent"), None);
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    fn blank_dates_are_reported_as_required(#[case] raw: &str) {
        let error = parse_optional_date(Some(raw), START).expect_err("blank date");
        assert_eq!(
            error.details(),
            Some(&json!({"fields": {"start_date": "Start date is required"}}))
        );
    }

    #[test]
    fn parses_calendar_dates() {
        assert_eq!(
            parse_optional_date(Some("2024-02-29"), START).expect("valid date"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[rstest]
    #[case("2024-02-30")]
    #[case("03/01/2024")]
    #[case("tomorrow")]
    fn malformed_dates_carry_field_details(#[case] raw: &str) {
        let error = parse_optional_date(Some(raw), START).expect_err("malformed date");
        assert_eq!(
            error.details(),
            Some(&json!({"field": "start_date", "value": raw, "code": "invalid_date"}))
        );
    }
}
