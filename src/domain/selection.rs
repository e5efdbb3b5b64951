//! Cascading block selection.
//!
//! A selection is an ordered path of block ids from a root down through
//! its descendants. Changing a selection at some depth discards every
//! deeper choice, so the path is always a valid root-to-descendant chain
//! with respect to the block snapshot it was built against.

use super::{
    block::{Block, BlockId},
    hierarchy::BlockIndex,
};

/// The cascading selector state machine.
///
/// Owns the [`BlockIndex`] snapshot it validates against. Later changes to
/// the server-side collection are not retroactively applied; refetch the
/// blocks and build a fresh `Cascade` instead.
#[derive(Debug, Default)]
pub struct Cascade {
    index: BlockIndex,
    path: Vec<BlockId>,
}

impl Cascade {
    /// Creates an empty selection over the given block snapshot.
    #[must_use]
    pub fn new(index: BlockIndex) -> Self {
        Self {
            index,
            path: Vec::new(),
        }
    }

    /// Records a choice at `depth`.
    ///
    /// The path is truncated to `depth` first, dropping this and all
    /// deeper selections; if `block` is `Some` the new choice is then
    /// appended. Clearing (`None`) an already-cleared depth is a no-op,
    /// so the operation is idempotent.
    ///
    /// Choices are expected to come from [`options_at`](Self::options_at),
    /// which keeps the chain valid by construction.
    pub fn select_at(&mut self, depth: usize, block: Option<BlockId>) {
        self.path.truncate(depth);
        if let Some(id) = block {
            debug_assert!(
                self.options_at(depth).any(|candidate| candidate.id == id),
                "selection {id} is not a child of the previous choice"
            );
            self.path.push(id);
        }
    }

    /// The candidate blocks for the selector at `depth`: the roots at
    /// depth 0, otherwise the children of the choice one level up.
    ///
    /// Depths beyond the current path have no candidates.
    #[must_use]
    pub fn options_at(&self, depth: usize) -> impl Iterator<Item = &Block> {
        let parent = depth.checked_sub(1).map_or(Some(None), |previous| {
            self.path.get(previous).copied().map(Some)
        });

        parent
            .into_iter()
            .flat_map(|parent| self.index.children(parent))
    }

    /// Number of selector depths to present.
    ///
    /// Depth 0 is always shown; depth `k + 1` is shown iff the selection
    /// at depth `k` has children.
    #[must_use]
    pub fn visible_depths(&self) -> usize {
        self.path.last().map_or(1, |&last| {
            self.path.len() + usize::from(self.index.has_children(last))
        })
    }

    /// The current selection path, shallowest first.
    #[must_use]
    pub fn selected_path(&self) -> &[BlockId] {
        &self.path
    }

    /// The deepest selected block, the value submitted to the server.
    ///
    /// `None` while nothing is selected; submission must be rejected
    /// locally in that case.
    #[must_use]
    pub fn terminal(&self) -> Option<BlockId> {
        self.path.last().copied()
    }

    /// The block snapshot this selection is validated against.
    #[must_use]
    pub const fn index(&self) -> &BlockIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::block::LevelId;

    fn block(id: i64, parent: Option<i64>, name: &str) -> Block {
        Block {
            id: BlockId(id),
            code: String::new(),
            name: name.to_string(),
            level_id: LevelId(1),
            parent_block_id: parent.map(BlockId),
            created_at: None,
            updated_at: None,
        }
    }

    fn cascade() -> Cascade {
        Cascade::new(BlockIndex::new(vec![
            block(1, None, "Math"),
            block(2, Some(1), "Algebra"),
            block(3, Some(2), "Polynomials"),
            block(4, None, "Biology"),
        ]))
    }

    #[test]
    fn walks_from_root_to_descendant() {
        let mut cascade = cascade();

        cascade.select_at(0, Some(BlockId(1)));
        assert_eq!(cascade.selected_path(), &[BlockId(1)]);
        assert_eq!(cascade.visible_depths(), 2);

        cascade.select_at(1, Some(BlockId(2)));
        assert_eq!(cascade.selected_path(), &[BlockId(1), BlockId(2)]);
        assert_eq!(cascade.terminal(), Some(BlockId(2)));
    }

    #[test]
    fn changing_a_shallow_choice_discards_deeper_ones() {
        let mut cascade = cascade();
        cascade.select_at(0, Some(BlockId(1)));
        cascade.select_at(1, Some(BlockId(2)));
        cascade.select_at(2, Some(BlockId(3)));

        cascade.select_at(0, Some(BlockId(4)));

        assert_eq!(cascade.selected_path(), &[BlockId(4)]);
    }

    #[test]
    fn clearing_the_root_resets_everything() {
        let mut cascade = cascade();
        cascade.select_at(0, Some(BlockId(1)));
        cascade.select_at(1, Some(BlockId(2)));
        cascade.select_at(2, Some(BlockId(3)));

        cascade.select_at(0, None);

        assert!(cascade.selected_path().is_empty());
        assert_eq!(cascade.terminal(), None);
        assert_eq!(cascade.visible_depths(), 1);
    }

    #[test]
    fn clearing_twice_is_idempotent() {
        let mut cascade = cascade();
        cascade.select_at(0, Some(BlockId(1)));
        cascade.select_at(1, Some(BlockId(2)));

        cascade.select_at(1, None);
        let once = cascade.selected_path().to_vec();
        cascade.select_at(1, None);

        assert_eq!(cascade.selected_path(), once.as_slice());
    }

    #[test]
    fn path_stays_prefix_consistent() {
        let mut cascade = cascade();
        cascade.select_at(0, Some(BlockId(1)));
        cascade.select_at(1, Some(BlockId(2)));
        cascade.select_at(2, Some(BlockId(3)));

        let path = cascade.selected_path().to_vec();
        for (depth, &id) in path.iter().enumerate() {
            let parent = depth.checked_sub(1).map(|previous| path[previous]);
            assert!(
                cascade
                    .index()
                    .children(parent)
                    .any(|candidate| candidate.id == id),
                "{id} is not a child of {parent:?}"
            );
        }
    }

    #[test]
    fn leaf_selection_shows_no_further_depth() {
        let mut cascade = cascade();
        cascade.select_at(0, Some(BlockId(4)));

        assert_eq!(cascade.visible_depths(), 1);
    }

    #[test]
    fn options_at_depth_zero_are_roots() {
        let cascade = cascade();
        let roots: Vec<_> = cascade.options_at(0).map(|b| b.id).collect();

        assert_eq!(roots, vec![BlockId(1), BlockId(4)]);
    }

    #[test]
    fn options_beyond_the_path_are_empty() {
        let cascade = cascade();

        assert_eq!(cascade.options_at(3).count(), 0);
    }
}
