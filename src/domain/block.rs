//! Block and level records as served by the remote API.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a [`Block`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockId(pub i64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a [`Level`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LevelId(pub i64);

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A node in the hierarchical content-classification tree
/// (subject → topic → subtopic).
///
/// The parent relation forms a forest; a block without a
/// `parent_block_id` is a root. The server owns the record and generates
/// the display `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Server-assigned identifier.
    pub id: BlockId,
    /// Server-generated display label.
    #[serde(default)]
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// The level this block sits at.
    pub level_id: LevelId,
    /// Parent block, absent for roots.
    #[serde(default)]
    pub parent_block_id: Option<BlockId>,
    /// Server timestamp.
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    /// Server timestamp.
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a block.
///
/// Level and parent are fixed at creation time; later edits may only
/// rename the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBlock {
    /// Human-readable name, must be non-empty.
    pub name: String,
    /// The level the new block belongs to.
    pub level_id: LevelId,
    /// Optional parent; absent creates a root block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_block_id: Option<BlockId>,
}

/// Payload for renaming a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockPatch {
    /// The new name.
    pub name: String,
}

/// An ordered stage classification applied to blocks.
///
/// Levels are totally ordered by [`stage`](Self::stage). By convention a
/// block's level is one stage deeper than its parent's, though the server
/// does not enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Server-assigned identifier.
    pub id: LevelId,
    /// Position in the level ordering.
    pub stage: i32,
    /// Human-readable name.
    pub name: String,
    /// Server timestamp.
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    /// Server timestamp.
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewLevel {
    /// Position in the level ordering.
    pub stage: i32,
    /// Human-readable name.
    pub name: String,
}

/// Payload for updating a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelPatch {
    /// Position in the level ordering.
    pub stage: i32,
    /// Human-readable name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_deserializes_with_absent_parent() {
        let json = r#"{"id": 1, "code": "B-01", "name": "Math", "level_id": 2}"#;
        let block: Block = serde_json::from_str(json).unwrap();

        assert_eq!(block.id, BlockId(1));
        assert_eq!(block.parent_block_id, None);
    }

    #[test]
    fn block_deserializes_with_null_parent() {
        let json =
            r#"{"id": 1, "code": "B-01", "name": "Math", "level_id": 2, "parent_block_id": null}"#;
        let block: Block = serde_json::from_str(json).unwrap();

        assert_eq!(block.parent_block_id, None);
    }

    #[test]
    fn new_block_omits_absent_parent() {
        let payload = NewBlock {
            name: "Math".to_string(),
            level_id: LevelId(1),
            parent_block_id: None,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("parent_block_id").is_none());
    }
}
