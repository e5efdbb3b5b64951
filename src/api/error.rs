//! The error taxonomy for operations against the remote API.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// What went wrong while executing an operation.
///
/// Validation failures are detected client-side and never reach the
/// network. Everything else is a translation of the server's response.
/// No variant is retried automatically; the caller corrects input and
/// resubmits.
#[derive(Debug, Error)]
pub enum Error {
    /// The input failed a client-side check; no request was sent.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The server reported a uniqueness violation.
    #[error("{0}")]
    Duplicate(String),

    /// No record exists for the given identifier.
    #[error("no record found for the given identifier")]
    NotFound,

    /// Any other non-2xx response.
    #[error("server returned {status}: {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, or the raw body.
        message: String,
    },

    /// The request could not be completed at all.
    #[error("request could not be completed")]
    Network(#[from] reqwest::Error),
}

impl Error {
    /// Whether this is a duplicate-key failure.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Structured error codes some server revisions attach to failure bodies.
const DUPLICATE_CODES: &[&str] = &["23505", "duplicate_key", "unique_violation"];

/// Known duplicate-key message signatures, inherited from the Postgres
/// backend: the SQLSTATE, its Spanish message, and the English message.
///
/// Matching on message text is fragile and only consulted when the body
/// carries no structured code and the status is not 409.
static DUPLICATE_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)23505|llave duplicada|duplicate key")
        .unwrap_or_else(|e| unreachable!("invalid duplicate signature pattern: {e}"))
});

/// The fields the server may include in a failure body.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn message(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

/// Translates a non-2xx response into an [`Error`].
///
/// Duplicate detection prefers, in order: a structured `code` in the JSON
/// body, HTTP 409, and finally the known message signatures.
#[must_use]
pub(super) fn classify_failure(status: u16, body: &str) -> Error {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message()
        .unwrap_or(body)
        .trim()
        .to_string();

    let coded_duplicate = parsed
        .code
        .as_deref()
        .is_some_and(|code| DUPLICATE_CODES.contains(&code));
    if coded_duplicate {
        return Error::Duplicate(message);
    }

    if status == 409 {
        return Error::Duplicate(message);
    }

    if status == 404 {
        return Error::NotFound;
    }

    if DUPLICATE_SIGNATURE.is_match(&message) {
        return Error::Duplicate(message);
    }

    Error::Server { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_code_wins() {
        let error = classify_failure(500, r#"{"code": "23505", "message": "boom"}"#);
        assert!(error.is_duplicate());
    }

    #[test]
    fn conflict_status_is_a_duplicate() {
        let error = classify_failure(409, r#"{"message": "already there"}"#);
        assert!(error.is_duplicate());
    }

    #[test]
    fn postgres_sqlstate_in_the_message_is_a_duplicate() {
        let error = classify_failure(
            500,
            r#"{"message": "ERROR 23505: duplicate key value violates unique constraint"}"#,
        );
        assert!(error.is_duplicate());
    }

    #[test]
    fn spanish_duplicate_message_is_a_duplicate() {
        let error = classify_failure(
            500,
            r#"{"message": "llave duplicada viola restricción de unicidad"}"#,
        );
        assert!(error.is_duplicate());
    }

    #[test]
    fn not_found_maps_to_not_found() {
        assert!(matches!(classify_failure(404, ""), Error::NotFound));
    }

    #[test]
    fn other_failures_keep_status_and_message() {
        let error = classify_failure(500, r#"{"message": "disk on fire"}"#);

        match error {
            Error::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "disk on fire");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_carried_verbatim() {
        let error = classify_failure(502, "Bad Gateway");

        match error {
            Error::Server { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_field_is_accepted_as_the_message() {
        let error = classify_failure(500, r#"{"error": "llave duplicada"}"#);
        assert!(error.is_duplicate());
    }
}
