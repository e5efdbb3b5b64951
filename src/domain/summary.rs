//! Display-time aggregation of a confinement's targets.
//!
//! Nothing here is persisted; the summary is recomputed from the server's
//! records every time it is shown.

use super::{
    block::BlockId,
    confinement::{ConfinementBlock, ConfinementText, ConfinementTextId},
};

/// One text allocation with its computed total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationLine {
    /// The allocation record.
    pub id: ConfinementTextId,
    /// The block the texts are drawn from.
    pub block_id: BlockId,
    /// Number of texts to produce.
    pub texts_to_do: u32,
    /// Questions attached to each text.
    pub questions_per_text: u32,
    /// `texts_to_do * questions_per_text`.
    pub total_questions: u64,
}

/// The aggregated view of a confinement's requirements and allocations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfinementSummary {
    /// Per-allocation breakdown, in server order.
    pub allocations: Vec<AllocationLine>,
    /// Sum of `questions_to_do` across the requirement records.
    pub requirement_questions: u64,
    /// Sum of the per-allocation totals.
    pub allocation_questions: u64,
}

impl ConfinementSummary {
    /// Requirement questions plus allocation questions.
    #[must_use]
    pub const fn grand_total(&self) -> u64 {
        self.requirement_questions + self.allocation_questions
    }
}

/// Summarizes a confinement's records for display.
#[must_use]
pub fn summarize(
    requirements: &[ConfinementBlock],
    allocations: &[ConfinementText],
) -> ConfinementSummary {
    let lines: Vec<AllocationLine> = allocations
        .iter()
        .map(|text| AllocationLine {
            id: text.id,
            block_id: text.block_id,
            texts_to_do: text.texts_to_do,
            questions_per_text: text.questions_per_text,
            total_questions: text.total_questions(),
        })
        .collect();

    let requirement_questions = requirements
        .iter()
        .map(|requirement| u64::from(requirement.questions_to_do))
        .sum();
    let allocation_questions = lines.iter().map(|line| line.total_questions).sum();

    ConfinementSummary {
        allocations: lines,
        requirement_questions,
        allocation_questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::confinement::{ConfinementBlockId, ConfinementId};

    fn requirement(id: i64, questions: u32) -> ConfinementBlock {
        ConfinementBlock {
            id: ConfinementBlockId(id),
            confinement_id: ConfinementId("c-1".to_string()),
            block_id: BlockId(id),
            questions_to_do: questions,
        }
    }

    fn allocation(id: i64, texts: u32, per_text: u32) -> ConfinementText {
        ConfinementText {
            id: ConfinementTextId(id),
            confinement_id: ConfinementId("c-1".to_string()),
            block_id: BlockId(id),
            texts_to_do: texts,
            questions_per_text: per_text,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn sums_both_sides_of_the_ledger() {
        let requirements = vec![requirement(1, 10), requirement(2, 5)];
        let allocations = vec![allocation(1, 3, 4), allocation(2, 2, 5)];

        let summary = summarize(&requirements, &allocations);

        assert_eq!(summary.requirement_questions, 15);
        assert_eq!(summary.allocation_questions, 22);
        assert_eq!(summary.grand_total(), 37);
    }

    #[test]
    fn per_line_totals_follow_the_product_law() {
        let summary = summarize(&[], &[allocation(1, 3, 4), allocation(2, 0, 9)]);

        assert_eq!(summary.allocations[0].total_questions, 12);
        assert_eq!(summary.allocations[1].total_questions, 0);
    }

    #[test]
    fn empty_inputs_produce_an_empty_summary() {
        let summary = summarize(&[], &[]);

        assert_eq!(summary, ConfinementSummary::default());
        assert_eq!(summary.grand_total(), 0);
    }
}
