//! Confinements (exam sessions) and their per-block targets.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::block::BlockId;

/// Identifier of a [`Confinement`].
///
/// Unlike the other entities the server keys confinements by an opaque
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfinementId(pub String);

impl fmt::Display for ConfinementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ConfinementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::str::FromStr for ConfinementId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// An exam session/configuration window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confinement {
    /// Server-assigned identifier.
    pub id: ConfinementId,
    /// Human-readable name.
    pub name: String,
    /// Overall question target for the session.
    pub total: u32,
    /// Window start.
    pub start_date: DateTime<Utc>,
    /// Window end; must fall after the start.
    pub end_date: DateTime<Utc>,
    /// Server timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Server timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a confinement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewConfinement {
    /// Human-readable name, must be non-empty.
    pub name: String,
    /// Overall question target, must be at least 1.
    pub total: u32,
    /// Window start.
    pub start_date: DateTime<Utc>,
    /// Window end; must fall after the start.
    pub end_date: DateTime<Utc>,
}

/// Identifier of a [`ConfinementBlock`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ConfinementBlockId(pub i64);

impl fmt::Display for ConfinementBlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A requirement: how many questions a confinement must draw from a block.
///
/// The server enforces uniqueness per `(confinement_id, block_id)` pair; a
/// violated constraint comes back as a duplicate-key failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfinementBlock {
    /// Server-assigned identifier.
    pub id: ConfinementBlockId,
    /// The confinement this requirement belongs to.
    pub confinement_id: ConfinementId,
    /// The block questions are drawn from. Immutable after creation.
    pub block_id: BlockId,
    /// Target question count.
    pub questions_to_do: u32,
}

/// Payload for creating a requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewConfinementBlock {
    /// The confinement the requirement belongs to.
    pub confinement_id: ConfinementId,
    /// The terminal block of a completed cascading selection.
    pub block_id: BlockId,
    /// Target question count.
    pub questions_to_do: u32,
}

/// Payload for updating a requirement. Only the quantity is resent; block
/// and confinement are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfinementBlockPatch {
    /// Target question count.
    pub questions_to_do: u32,
}

/// Identifier of a [`ConfinementText`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ConfinementTextId(pub i64);

impl fmt::Display for ConfinementTextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A text allocation: how many texts, and how many questions per text,
/// a confinement draws from a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfinementText {
    /// Server-assigned identifier.
    pub id: ConfinementTextId,
    /// The confinement this allocation belongs to.
    pub confinement_id: ConfinementId,
    /// The block texts are drawn from. Immutable after creation.
    pub block_id: BlockId,
    /// Number of texts to produce.
    pub texts_to_do: u32,
    /// Questions attached to each text.
    pub questions_per_text: u32,
    /// Server timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Server timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ConfinementText {
    /// Total questions this allocation contributes:
    /// `texts_to_do * questions_per_text`.
    ///
    /// Computed at display time, never stored.
    #[must_use]
    pub const fn total_questions(&self) -> u64 {
        self.texts_to_do as u64 * self.questions_per_text as u64
    }
}

/// Payload for creating a text allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewConfinementText {
    /// The confinement the allocation belongs to.
    pub confinement_id: ConfinementId,
    /// The terminal block of a completed cascading selection.
    pub block_id: BlockId,
    /// Number of texts to produce.
    pub texts_to_do: u32,
    /// Questions attached to each text.
    pub questions_per_text: u32,
}

/// Payload for updating a text allocation. The block selector is disabled
/// on edit; only the quantities change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfinementTextPatch {
    /// Number of texts to produce.
    pub texts_to_do: u32,
    /// Questions attached to each text.
    pub questions_per_text: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(texts_to_do: u32, questions_per_text: u32) -> ConfinementText {
        ConfinementText {
            id: ConfinementTextId(1),
            confinement_id: ConfinementId("c-1".to_string()),
            block_id: BlockId(5),
            texts_to_do,
            questions_per_text,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn total_questions_is_the_product() {
        assert_eq!(text(3, 4).total_questions(), 12);
    }

    #[test]
    fn total_questions_zero_cases() {
        assert_eq!(text(0, 7).total_questions(), 0);
        assert_eq!(text(7, 0).total_questions(), 0);
    }

    #[test]
    fn total_questions_does_not_overflow_u32() {
        assert_eq!(
            text(u32::MAX, 2).total_questions(),
            u64::from(u32::MAX) * 2
        );
    }
}
