//! Level subcommands.

use clap::Parser;
use examgen::{
    Client,
    domain::{Level, LevelId, LevelPatch, NewLevel},
};
use tracing::instrument;

use super::terminal::{Colorize, row};

/// Verbs over the level ordering.
#[derive(Debug, Parser)]
pub enum LevelCommand {
    /// List all levels, ordered by stage
    List,

    /// Create a level
    Add {
        /// Human-readable name
        name: String,

        /// Position in the level ordering
        #[arg(long)]
        stage: i32,
    },

    /// Update a level's name and stage
    Update {
        /// The level id
        id: i64,

        /// Human-readable name
        name: String,

        /// Position in the level ordering
        #[arg(long)]
        stage: i32,
    },

    /// Delete a level
    Remove {
        /// The level id
        id: i64,
    },
}

impl LevelCommand {
    /// Executes the verb against the API.
    #[instrument(level = "debug", skip(self, client))]
    pub async fn run(self, client: &Client) -> anyhow::Result<()> {
        match self {
            Self::List => {
                let mut levels: Vec<Level> = client.list().await?;
                if levels.is_empty() {
                    println!("No levels yet.");
                    return Ok(());
                }

                levels.sort_by_key(|level| level.stage);

                println!("{}", row(&[("STAGE", 5), ("ID", 5), ("NAME", 0)]).dim());
                for level in levels {
                    println!(
                        "{}",
                        row(&[
                            (&level.stage.to_string(), 5),
                            (&level.id.to_string(), 5),
                            (&level.name, 0),
                        ])
                    );
                }
            }
            Self::Add { name, stage } => {
                let created: Level = client.create(&NewLevel { stage, name }).await?;
                println!(
                    "{} level {} at stage {} ({})",
                    "Created".success(),
                    created.name,
                    created.stage,
                    created.id
                );
            }
            Self::Update { id, name, stage } => {
                let updated: Level = client
                    .update(&LevelId(id), &LevelPatch { stage, name })
                    .await?;
                println!("{} level {} ({})", "Updated".success(), updated.name, id);
            }
            Self::Remove { id } => {
                client.delete::<Level>(&LevelId(id)).await?;
                println!("{} level {id}", "Deleted".success());
            }
        }
        Ok(())
    }
}
