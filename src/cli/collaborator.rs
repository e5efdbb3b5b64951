//! Collaborator subcommands.
//!
//! The roster is read-only from this client, so there are no write verbs.

use clap::Parser;
use examgen::{
    Client,
    domain::{Collaborator, CollaboratorId},
};
use tracing::instrument;

use super::terminal::{Colorize, row};

/// Verbs over the collaborator roster.
#[derive(Debug, Parser)]
pub enum CollaboratorCommand {
    /// List all collaborators
    List,

    /// Show one collaborator
    Show {
        /// The collaborator id
        id: i64,
    },
}

impl CollaboratorCommand {
    /// Executes the verb against the API.
    #[instrument(level = "debug", skip(self, client))]
    pub async fn run(self, client: &Client) -> anyhow::Result<()> {
        match self {
            Self::List => {
                let collaborators: Vec<Collaborator> = client.list().await?;
                if collaborators.is_empty() {
                    println!("No collaborators registered.");
                    return Ok(());
                }

                println!(
                    "{}",
                    row(&[("ID", 5), ("DNI", 12), ("NAME", 24), ("EMAIL", 0)]).dim()
                );
                for collaborator in collaborators {
                    println!(
                        "{}",
                        row(&[
                            (&collaborator.id.to_string(), 5),
                            (&collaborator.dni, 12),
                            (&collaborator.name, 24),
                            (collaborator.email.as_deref().unwrap_or("-"), 0),
                        ])
                    );
                }
            }
            Self::Show { id } => {
                let collaborator: Collaborator = client.get(&CollaboratorId(id)).await?;
                println!(
                    "{} {}",
                    collaborator.id.to_string().dim(),
                    collaborator.name
                );
                println!("  dni:   {}", collaborator.dni);
                println!(
                    "  email: {}",
                    collaborator.email.as_deref().unwrap_or("not provided")
                );
                if let Some(created) = collaborator.created_at {
                    println!("  since: {}", created.format("%Y-%m-%d"));
                }
            }
        }
        Ok(())
    }
}
