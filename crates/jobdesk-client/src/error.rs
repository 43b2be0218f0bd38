//! Failures surfaced to callers.
//!
//! There are no retries: a failed call is reported once and the caches are
//! left as they were.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by [`crate::ApiClient`] and the stores built on it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL or a derived route is unusable.
    #[error("invalid URL '{url}': {message}")]
    InvalidUrl {
        /// Offending URL or route.
        url: String,
        /// Parser message.
        message: String,
    },
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("{status}: {message}")]
    Status {
        /// HTTP status.
        status: StatusCode,
        /// Machine-readable code from the error envelope, e.g. `not_found`.
        code: String,
        /// Human-readable message from the error envelope.
        message: String,
        /// Structured details, e.g. per-field validation messages.
        details: Option<Value>,
    },
    /// A success response did not match the expected shape.
    #[error("unexpected response body: {message}")]
    Decode {
        /// Decoder message.
        message: String,
    },
}

#[derive(Deserialize)]
struct Envelope {
    code: Option<String>,
    message: Option<String>,
    details: Option<Value>,
}

impl ClientError {
    /// Build a [`ClientError::Status`] from a response body, falling back
    /// to the status reason when the body is not an error envelope.
    #[must_use]
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let envelope = serde_json::from_slice::<Envelope>(body).ok();
        let (code, message, details) = match envelope {
            Some(Envelope {
                code,
                message,
                details,
            }) => (code, message, details),
            None => (None, None, None),
        };
        Self::Status {
            status,
            code: code.unwrap_or_else(|| "unknown".to_owned()),
            message: message
                .or_else(|| status.canonical_reason().map(str::to_owned))
                .unwrap_or_else(|| status.as_str().to_owned()),
            details,
        }
    }

    /// HTTP status when the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the call for lack of a session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Per-field validation messages, keyed by field name.
    ///
    /// Empty unless the backend reported a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobdesk_client::ClientError;
    /// use reqwest::StatusCode;
    ///
    /// let body = br#"{"code":"invalid_request","message":"Validation failed",
    ///     "details":{"fields":{"rate":"Job rate must be at least 10 characters long"}}}"#;
    /// let error = ClientError::from_status(StatusCode::BAD_REQUEST, body);
    /// assert_eq!(
    ///     error.field_errors().get("rate").map(String::as_str),
    ///     Some("Job rate must be at least 10 characters long"),
    /// );
    /// ```
    #[must_use]
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        let Self::Status {
            details: Some(details),
            ..
        } = self
        else {
            return BTreeMap::new();
        };
        details
            .get("fields")
            .and_then(Value::as_object)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|(field, message)| {
                        message.as_str().map(|text| (field.clone(), text.to_owned()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    //! Envelope parsing.

    use super::*;
    use rstest::rstest;

    #[test]
    fn reads_the_error_envelope() {
        let body = br#"{"code":"forbidden","message":"Unauthorized access to client","traceId":"abc"}"#;
        let error = ClientError::from_status(StatusCode::FORBIDDEN, body);
        assert!(matches!(
            &error,
            ClientError::Status { code, message, details: None, .. }
                if code == "forbidden" && message == "Unauthorized access to client"
        ));
        assert!(error.field_errors().is_empty());
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"<html>bad gateway</html>".as_slice())]
    fn falls_back_to_the_status_reason(#[case] body: &[u8]) {
        let error = ClientError::from_status(StatusCode::BAD_GATEWAY, body);
        assert_eq!(error.to_string(), "502 Bad Gateway: Bad Gateway");
    }

    #[test]
    fn recognises_missing_sessions() {
        let body = br#"{"code":"unauthorized","message":"Not authenticated"}"#;
        assert!(ClientError::from_status(StatusCode::UNAUTHORIZED, body).is_unauthorized());
        assert!(!ClientError::from_status(StatusCode::NOT_FOUND, body).is_unauthorized());
    }
}
