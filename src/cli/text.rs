//! Text-allocation subcommands.

use clap::Parser;
use examgen::{
    Client, aggregate,
    domain::{Block, BlockId, BlockIndex, ConfinementId, ConfinementText, ConfinementTextId},
};
use tracing::instrument;

use super::{
    requirement::select_block,
    terminal::{Colorize, row},
};

/// Verbs over a confinement's text allocations.
#[derive(Debug, Parser)]
pub enum TextCommand {
    /// List the text allocations of a confinement, with computed totals
    List {
        /// The confinement id
        confinement: ConfinementId,
    },

    /// Create an allocation, selecting the block through the cascading
    /// selector (or directly with --block)
    Add {
        /// The confinement id
        confinement: ConfinementId,

        /// Number of texts to produce
        #[arg(long)]
        texts: u32,

        /// Questions attached to each text
        #[arg(long)]
        per_text: u32,

        /// Skip the interactive selector and use this block id
        #[arg(long)]
        block: Option<i64>,
    },

    /// Update the quantities of an allocation (the block is fixed)
    Set {
        /// The allocation record id
        id: i64,

        /// Number of texts to produce
        #[arg(long)]
        texts: u32,

        /// Questions attached to each text
        #[arg(long)]
        per_text: u32,
    },

    /// Delete an allocation
    Remove {
        /// The allocation record id
        id: i64,
    },
}

impl TextCommand {
    /// Executes the verb against the API.
    #[instrument(level = "debug", skip(self, client))]
    pub async fn run(self, client: &Client) -> anyhow::Result<()> {
        match self {
            Self::List { confinement } => {
                let allocations = client.confinement_allocations(&confinement).await?;
                if allocations.is_empty() {
                    println!("No text allocations yet for confinement {confinement}.");
                    return Ok(());
                }

                print_allocations(&allocations);
            }
            Self::Add {
                confinement,
                texts,
                per_text,
                block,
            } => {
                let block_id = match block {
                    Some(raw) => Some(BlockId(raw)),
                    None => {
                        let blocks: Vec<Block> = client.list().await?;
                        select_block(BlockIndex::new(blocks))?
                    }
                };

                let created =
                    aggregate::create_allocation(client, confinement, block_id, texts, per_text)
                        .await?;
                println!(
                    "{} allocation for block {}: {} texts × {} questions = {}",
                    "Created".success(),
                    created.block_id,
                    created.texts_to_do,
                    created.questions_per_text,
                    created.total_questions()
                );
            }
            Self::Set {
                id,
                texts,
                per_text,
            } => {
                let updated = aggregate::update_allocation(
                    client,
                    ConfinementTextId(id),
                    texts,
                    per_text,
                )
                .await?;
                println!(
                    "{} allocation {}: {} texts × {} questions = {}",
                    "Updated".success(),
                    id,
                    updated.texts_to_do,
                    updated.questions_per_text,
                    updated.total_questions()
                );
            }
            Self::Remove { id } => {
                client
                    .delete::<ConfinementText>(&ConfinementTextId(id))
                    .await?;
                println!("{} allocation {id}", "Deleted".success());
            }
        }
        Ok(())
    }
}

fn print_allocations(allocations: &[ConfinementText]) {
    println!(
        "{}",
        row(&[("ID", 5), ("BLOCK", 6), ("TEXTS", 6), ("PER TEXT", 8), ("TOTAL", 0)]).dim()
    );
    for allocation in allocations {
        println!(
            "{}",
            row(&[
                (&allocation.id.to_string(), 5),
                (&allocation.block_id.to_string(), 6),
                (&allocation.texts_to_do.to_string(), 6),
                (&allocation.questions_per_text.to_string(), 8),
                (&allocation.total_questions().to_string(), 0),
            ])
        );
    }

    let total: u64 = allocations
        .iter()
        .map(ConfinementText::total_questions)
        .sum();
    println!("{}", format!("total questions: {total}").dim());
}
