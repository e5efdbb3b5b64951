//! Requirement subcommands (per-block question targets of a
//! confinement).

use clap::Parser;
use dialoguer::Select;
use examgen::{
    Client, aggregate,
    domain::{Block, BlockId, BlockIndex, Cascade, ConfinementBlock, ConfinementBlockId,
        ConfinementId},
};
use tracing::instrument;

use super::terminal::{Colorize, row};

/// Verbs over a confinement's requirements.
#[derive(Debug, Parser)]
pub enum RequirementCommand {
    /// List the requirements of a confinement
    List {
        /// The confinement id
        confinement: ConfinementId,
    },

    /// Create a requirement, selecting the block through the cascading
    /// selector (or directly with --block)
    Add {
        /// The confinement id
        confinement: ConfinementId,

        /// Target question count
        #[arg(long)]
        questions: u32,

        /// Skip the interactive selector and use this block id
        #[arg(long)]
        block: Option<i64>,
    },

    /// Update the question count of a requirement (the block is fixed)
    Set {
        /// The requirement record id
        id: i64,

        /// Target question count
        #[arg(long)]
        questions: u32,
    },

    /// Delete a requirement
    Remove {
        /// The requirement record id
        id: i64,
    },
}

impl RequirementCommand {
    /// Executes the verb against the API.
    #[instrument(level = "debug", skip(self, client))]
    pub async fn run(self, client: &Client) -> anyhow::Result<()> {
        match self {
            Self::List { confinement } => {
                let requirements = client.confinement_requirements(&confinement).await?;
                if requirements.is_empty() {
                    println!("No requirements yet for confinement {confinement}.");
                    return Ok(());
                }

                print_requirements(&requirements);
            }
            Self::Add {
                confinement,
                questions,
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
                    aggregate::create_requirement(client, confinement, block_id, questions)
                        .await?;
                println!(
                    "{} requirement for block {} ({} questions)",
                    "Created".success(),
                    created.block_id,
                    created.questions_to_do
                );
            }
            Self::Set { id, questions } => {
                let updated =
                    aggregate::update_requirement(client, ConfinementBlockId(id), questions)
                        .await?;
                println!(
                    "{} requirement {} ({} questions)",
                    "Updated".success(),
                    id,
                    updated.questions_to_do
                );
            }
            Self::Remove { id } => {
                client
                    .delete::<ConfinementBlock>(&ConfinementBlockId(id))
                    .await?;
                println!("{} requirement {id}", "Deleted".success());
            }
        }
        Ok(())
    }
}

fn print_requirements(requirements: &[ConfinementBlock]) {
    println!("{}", row(&[("ID", 5), ("BLOCK", 6), ("QUESTIONS", 0)]).dim());
    for requirement in requirements {
        println!(
            "{}",
            row(&[
                (&requirement.id.to_string(), 5),
                (&requirement.block_id.to_string(), 6),
                (&requirement.questions_to_do.to_string(), 0),
            ])
        );
    }

    let total: u64 = requirements
        .iter()
        .map(|requirement| u64::from(requirement.questions_to_do))
        .sum();
    println!("{}", format!("total questions: {total}").dim());
}

/// Walks the cascading selector one depth at a time.
///
/// At every depth the candidates are the children of the previous choice;
/// once a block with children is chosen the user may either descend or
/// stop and use the current selection. Returns `None` when there is
/// nothing to select.
pub fn select_block(index: BlockIndex) -> anyhow::Result<Option<BlockId>> {
    let mut cascade = Cascade::new(index);

    for depth in 0..cascade.index().len() {
        let options: Vec<(BlockId, String)> = cascade
            .options_at(depth)
            .map(|block| (block.id, format!("{} {}", block.code, block.name)))
            .collect();
        if options.is_empty() {
            break;
        }

        let mut items: Vec<String> = options.iter().map(|(_, label)| label.clone()).collect();
        if depth > 0 {
            items.push("(use current selection)".to_string());
        }

        let picked = Select::new()
            .with_prompt(format!("Level {}", depth + 1))
            .items(&items)
            .default(0)
            .interact()?;

        if picked == options.len() {
            break;
        }
        cascade.select_at(depth, Some(options[picked].0));
    }

    Ok(cascade.terminal())
}
