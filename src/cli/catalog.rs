//! Shared subcommands for the name-only catalogs (modalities and
//! processes).
//!
//! The two resources have identical shapes, so a single generic runner
//! serves both branches of the command tree.

use clap::Parser;
use examgen::{Client, api::NamedResource};
use tracing::instrument;

use super::terminal::{Colorize, row};

/// Verbs over a name-only catalog.
#[derive(Debug, Parser)]
pub enum CatalogCommand {
    /// List all entries
    List,

    /// Create an entry
    Add {
        /// Human-readable name
        name: String,
    },

    /// Rename an entry
    Rename {
        /// The entry id
        id: i64,

        /// The new name
        name: String,
    },

    /// Delete an entry
    Remove {
        /// The entry id
        id: i64,
    },
}

/// Executes a catalog verb for the concrete resource `R`.
#[instrument(level = "debug", skip(client, command), fields(resource = R::PATH))]
pub async fn run<R: NamedResource>(client: &Client, command: CatalogCommand) -> anyhow::Result<()> {
    match command {
        CatalogCommand::List => {
            let entries: Vec<R> = client.list().await?;
            if entries.is_empty() {
                println!("No {} entries yet.", R::NAME);
                return Ok(());
            }

            println!("{}", row(&[("ID", 5), ("NAME", 0)]).dim());
            for entry in entries {
                println!(
                    "{}",
                    row(&[(&entry.id().to_string(), 5), (entry.display_name(), 0)])
                );
            }
        }
        CatalogCommand::Add { name } => {
            let created: R = client.create(&R::create_payload(name)).await?;
            println!(
                "{} {} {} ({})",
                "Created".success(),
                R::NAME,
                created.display_name(),
                created.id()
            );
        }
        CatalogCommand::Rename { id, name } => {
            let updated: R = client
                .update(&R::id_from(id), &R::rename_payload(name))
                .await?;
            println!(
                "{} {} {} ({id})",
                "Renamed".success(),
                R::NAME,
                updated.display_name()
            );
        }
        CatalogCommand::Remove { id } => {
            client.delete::<R>(&R::id_from(id)).await?;
            println!("{} {} {id}", "Deleted".success(), R::NAME);
        }
    }
    Ok(())
}
