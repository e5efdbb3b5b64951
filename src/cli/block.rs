//! Block subcommands.

use clap::Parser;
use examgen::{
    Client,
    aggregate::validate_block,
    domain::{Block, BlockId, BlockIndex, BlockPatch, LevelId, NewBlock},
};
use tracing::instrument;

use super::terminal::Colorize;

/// Verbs over the block tree.
#[derive(Debug, Parser)]
pub enum BlockCommand {
    /// List all blocks as an indented tree
    List,

    /// Show one block with its ancestry path
    Show {
        /// The block id
        id: i64,
    },

    /// Create a block (level and parent are fixed at creation)
    Add {
        /// Human-readable name
        name: String,

        /// The level the block belongs to
        #[arg(long)]
        level: i64,

        /// Parent block id; omit to create a root block
        #[arg(long)]
        parent: Option<i64>,
    },

    /// Rename a block (the only mutable field)
    Rename {
        /// The block id
        id: i64,

        /// The new name
        name: String,
    },

    /// Delete a block
    Remove {
        /// The block id
        id: i64,
    },
}

impl BlockCommand {
    /// Executes the verb against the API.
    #[instrument(level = "debug", skip(self, client))]
    pub async fn run(self, client: &Client) -> anyhow::Result<()> {
        match self {
            Self::List => {
                let blocks: Vec<Block> = client.list().await?;
                if blocks.is_empty() {
                    println!("No blocks yet.");
                    return Ok(());
                }

                let index = BlockIndex::new(blocks);
                print_subtree(&index, None, 0);
            }
            Self::Show { id } => {
                let blocks: Vec<Block> = client.list().await?;
                let index = BlockIndex::new(blocks);
                let chain = index.ancestry(BlockId(id));

                let Some(block) = chain.last() else {
                    anyhow::bail!("block {id} not found");
                };

                let path: Vec<&str> = chain.iter().map(|b| b.name.as_str()).collect();
                println!("{} {}", block.code.dim(), block.name);
                println!("  path:  {}", path.join(" / "));
                println!("  level: {}", block.level_id);
            }
            Self::Add {
                name,
                level,
                parent,
            } => {
                let payload = NewBlock {
                    name,
                    level_id: LevelId(level),
                    parent_block_id: parent.map(BlockId),
                };
                validate_block(&payload)?;

                let created: Block = client.create(&payload).await?;
                println!(
                    "{} block {} ({})",
                    "Created".success(),
                    created.name,
                    created.id
                );
            }
            Self::Rename { id, name } => {
                let updated: Block = client
                    .update(&BlockId(id), &BlockPatch { name })
                    .await?;
                println!("{} block {} ({})", "Renamed".success(), updated.name, id);
            }
            Self::Remove { id } => {
                client.delete::<Block>(&BlockId(id)).await?;
                println!("{} block {id}", "Deleted".success());
            }
        }
        Ok(())
    }
}

/// Prints the children of `parent` at the given indent, then recurses.
///
/// The recursion depth is bounded by the tree height; the index itself
/// guards against malformed parent cycles on the ancestry side, and a
/// cycle can never be reached from the roots here.
fn print_subtree(index: &BlockIndex, parent: Option<BlockId>, indent: usize) {
    for block in index.children(parent) {
        println!(
            "{:indent$}{} {} {}",
            "",
            block.code.dim(),
            block.name,
            format!("(id {})", block.id).dim(),
            indent = indent * 2
        );
        print_subtree(index, Some(block.id), indent + 1);
    }
}
