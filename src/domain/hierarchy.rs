//! An index over the flat block collection.
//!
//! The server returns blocks as a flat list with integer back-references
//! to their parents. The [`BlockIndex`] builds a parent → children map on
//! demand rather than wiring up an in-memory pointer graph, and is thrown
//! away and rebuilt whenever the collection is refetched.

use std::collections::HashMap;

use super::block::{Block, BlockId};

/// A lookup structure over a snapshot of the block collection.
///
/// Children are returned in collection order; no additional sort is
/// imposed. All reads are pure.
#[derive(Debug, Default)]
pub struct BlockIndex {
    blocks: Vec<Block>,
    by_id: HashMap<BlockId, usize>,
    children: HashMap<Option<BlockId>, Vec<usize>>,
}

impl BlockIndex {
    /// Builds the index from a snapshot of the block collection.
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        let mut by_id = HashMap::with_capacity(blocks.len());
        let mut children: HashMap<Option<BlockId>, Vec<usize>> = HashMap::new();

        for (position, block) in blocks.iter().enumerate() {
            by_id.insert(block.id, position);
            children
                .entry(block.parent_block_id)
                .or_default()
                .push(position);
        }

        Self {
            blocks,
            by_id,
            children,
        }
    }

    /// Returns the blocks whose parent is `parent`, in collection order.
    ///
    /// Passing `None` returns the root blocks. A parent id that does not
    /// occur in the collection yields an empty iterator, not an error.
    #[must_use]
    pub fn children(&self, parent: Option<BlockId>) -> impl Iterator<Item = &Block> {
        self.children
            .get(&parent)
            .into_iter()
            .flatten()
            .map(|&position| &self.blocks[position])
    }

    /// Whether the given block has any children.
    #[must_use]
    pub fn has_children(&self, parent: BlockId) -> bool {
        self.children
            .get(&Some(parent))
            .is_some_and(|ids| !ids.is_empty())
    }

    /// Looks up a block by id.
    #[must_use]
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.by_id.get(&id).map(|&position| &self.blocks[position])
    }

    /// Returns the chain of blocks from the root down to (and including)
    /// `id`, for display paths such as `Math / Algebra`.
    ///
    /// Returns an empty chain when `id` is not in the collection. The walk
    /// is bounded by the collection size, so a malformed collection with a
    /// parent cycle terminates rather than looping.
    #[must_use]
    pub fn ancestry(&self, id: BlockId) -> Vec<&Block> {
        let mut chain = Vec::new();
        let mut current = self.get(id);

        while let Some(block) = current {
            chain.push(block);
            if chain.len() > self.blocks.len() {
                break;
            }
            current = block.parent_block_id.and_then(|parent| self.get(parent));
        }

        chain.reverse();
        chain
    }

    /// All blocks in the snapshot, in collection order.
    #[must_use]
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Number of blocks in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::block::LevelId;

    fn block(id: i64, parent: Option<i64>, name: &str) -> Block {
        Block {
            id: BlockId(id),
            code: format!("B-{id:02}"),
            name: name.to_string(),
            level_id: LevelId(1),
            parent_block_id: parent.map(BlockId),
            created_at: None,
            updated_at: None,
        }
    }

    fn sample() -> BlockIndex {
        BlockIndex::new(vec![
            block(1, None, "Math"),
            block(2, Some(1), "Algebra"),
            block(3, Some(1), "Geometry"),
            block(4, Some(2), "Linear equations"),
            block(5, None, "Biology"),
        ])
    }

    #[test]
    fn roots_are_children_of_none() {
        let index = sample();
        let roots: Vec<_> = index.children(None).map(|b| b.id).collect();

        assert_eq!(roots, vec![BlockId(1), BlockId(5)]);
    }

    #[test]
    fn children_filter_is_exact_and_ordered() {
        let index = sample();
        let children: Vec<_> = index.children(Some(BlockId(1))).map(|b| b.id).collect();

        assert_eq!(children, vec![BlockId(2), BlockId(3)]);
    }

    #[test]
    fn unknown_parent_yields_empty_not_error() {
        let index = sample();

        assert_eq!(index.children(Some(BlockId(99))).count(), 0);
    }

    #[test]
    fn leaf_has_no_children() {
        let index = sample();

        assert!(!index.has_children(BlockId(4)));
        assert!(index.has_children(BlockId(2)));
    }

    #[test]
    fn ancestry_runs_from_root_to_target() {
        let index = sample();
        let names: Vec<_> = index
            .ancestry(BlockId(4))
            .iter()
            .map(|b| b.name.as_str())
            .collect();

        assert_eq!(names, vec!["Math", "Algebra", "Linear equations"]);
    }

    #[test]
    fn ancestry_of_unknown_block_is_empty() {
        let index = sample();

        assert!(index.ancestry(BlockId(42)).is_empty());
    }

    #[test]
    fn ancestry_terminates_on_parent_cycle() {
        // A malformed collection the server should never produce.
        let index = BlockIndex::new(vec![block(1, Some(2), "A"), block(2, Some(1), "B")]);

        let chain = index.ancestry(BlockId(1));
        assert!(chain.len() <= 3);
    }

    #[test]
    fn empty_collection() {
        let index = BlockIndex::new(Vec::new());

        assert!(index.is_empty());
        assert_eq!(index.children(None).count(), 0);
    }
}
