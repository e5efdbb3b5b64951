//! Collaborators: the people commissioned to write questions.
//!
//! The roster is managed elsewhere; this client only reads it, so there
//! are no creation or update payloads.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a [`Collaborator`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CollaboratorId(pub i64);

impl fmt::Display for CollaboratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A question-writing collaborator, as served by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    /// Server-assigned identifier.
    pub id: CollaboratorId,
    /// National identity document number.
    pub dni: String,
    /// Full name.
    pub name: String,
    /// Contact email; the server allows it to be absent.
    #[serde(default)]
    pub email: Option<String>,
    /// Server timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Server timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_email() {
        let json = r#"{"id": 7, "dni": "12345678A", "name": "Ana Ruiz"}"#;
        let collaborator: Collaborator = serde_json::from_str(json).unwrap();

        assert_eq!(collaborator.id, CollaboratorId(7));
        assert_eq!(collaborator.email, None);
    }

    #[test]
    fn deserializes_with_null_email() {
        let json = r#"{"id": 7, "dni": "12345678A", "name": "Ana Ruiz", "email": null}"#;
        let collaborator: Collaborator = serde_json::from_str(json).unwrap();

        assert_eq!(collaborator.email, None);
    }

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "id": 7,
            "dni": "12345678A",
            "name": "Ana Ruiz",
            "email": "ana@exams.example",
            "created_at": "2026-01-05T10:00:00Z"
        }"#;
        let collaborator: Collaborator = serde_json::from_str(json).unwrap();

        assert_eq!(collaborator.email.as_deref(), Some("ana@exams.example"));
        assert!(collaborator.created_at.is_some());
    }
}
