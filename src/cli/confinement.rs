//! Confinement subcommands, including the aggregation and export reads.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use examgen::{
    Client, aggregate,
    domain::{Confinement, ConfinementId, NewConfinement},
};
use tracing::instrument;

use super::{
    requirement::RequirementCommand,
    terminal::{Colorize, row},
    text::TextCommand,
};

/// Parses a `YYYY-MM-DD` date into a UTC datetime at midnight.
fn parse_date(s: &str) -> Result<DateTime<Utc>, String> {
    let date: NaiveDate = s
        .parse()
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| format!("invalid date '{s}'"))?;
    Ok(midnight.and_utc())
}

/// Verbs over confinements.
#[derive(Debug, Parser)]
pub enum ConfinementCommand {
    /// List all confinements
    List,

    /// Show one confinement
    Show {
        /// The confinement id
        id: ConfinementId,
    },

    /// Create a confinement
    Add {
        /// Human-readable name
        name: String,

        /// Overall question target
        #[arg(long)]
        total: u32,

        /// Window start (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start: DateTime<Utc>,

        /// Window end (YYYY-MM-DD), must fall after the start
        #[arg(long, value_parser = parse_date)]
        end: DateTime<Utc>,
    },

    /// Update a confinement
    Update {
        /// The confinement id
        id: ConfinementId,

        /// Human-readable name
        name: String,

        /// Overall question target
        #[arg(long)]
        total: u32,

        /// Window start (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start: DateTime<Utc>,

        /// Window end (YYYY-MM-DD), must fall after the start
        #[arg(long, value_parser = parse_date)]
        end: DateTime<Utc>,
    },

    /// Delete a confinement
    Remove {
        /// The confinement id
        id: ConfinementId,
    },

    /// Aggregate a confinement's requirements and allocations for display
    Summary {
        /// The confinement id
        id: ConfinementId,
    },

    /// Download the server-generated spreadsheet export
    Export {
        /// The confinement id
        id: ConfinementId,

        /// Where to write the spreadsheet
        #[arg(long)]
        out: PathBuf,
    },

    /// Manage the per-block question requirements
    #[command(subcommand)]
    Requirement(RequirementCommand),

    /// Manage the per-block text allocations
    #[command(subcommand)]
    Text(TextCommand),
}

impl ConfinementCommand {
    /// Executes the verb against the API.
    #[allow(clippy::too_many_lines)]
    #[instrument(level = "debug", skip(self, client))]
    pub async fn run(self, client: &Client) -> anyhow::Result<()> {
        match self {
            Self::List => {
                let confinements: Vec<Confinement> = client.list().await?;
                if confinements.is_empty() {
                    println!("No confinements yet.");
                    return Ok(());
                }

                println!(
                    "{}",
                    row(&[("ID", 12), ("NAME", 24), ("TOTAL", 6), ("WINDOW", 0)]).dim()
                );
                for confinement in confinements {
                    let window = format!(
                        "{} → {}",
                        confinement.start_date.format("%Y-%m-%d"),
                        confinement.end_date.format("%Y-%m-%d")
                    );
                    println!(
                        "{}",
                        row(&[
                            (&confinement.id.to_string(), 12),
                            (&confinement.name, 24),
                            (&confinement.total.to_string(), 6),
                            (&window, 0),
                        ])
                    );
                }
            }
            Self::Show { id } => {
                let confinement: Confinement = client.get(&id).await?;
                println!("{} {}", confinement.id.to_string().dim(), confinement.name);
                println!("  total:  {}", confinement.total);
                println!(
                    "  window: {} → {}",
                    confinement.start_date.format("%Y-%m-%d"),
                    confinement.end_date.format("%Y-%m-%d")
                );
            }
            Self::Add {
                name,
                total,
                start,
                end,
            } => {
                let payload = NewConfinement {
                    name,
                    total,
                    start_date: start,
                    end_date: end,
                };
                aggregate::validate_confinement(&payload)?;

                let created: Confinement = client.create(&payload).await?;
                println!(
                    "{} confinement {} ({})",
                    "Created".success(),
                    created.name,
                    created.id
                );
            }
            Self::Update {
                id,
                name,
                total,
                start,
                end,
            } => {
                let payload = NewConfinement {
                    name,
                    total,
                    start_date: start,
                    end_date: end,
                };
                aggregate::validate_confinement(&payload)?;

                let updated: Confinement = client.update(&id, &payload).await?;
                println!(
                    "{} confinement {} ({})",
                    "Updated".success(),
                    updated.name,
                    updated.id
                );
            }
            Self::Remove { id } => {
                client.delete::<Confinement>(&id).await?;
                println!("{} confinement {id}", "Deleted".success());
            }
            Self::Summary { id } => {
                let summary = aggregate::summarize_confinement(client, &id).await?;

                if summary.allocations.is_empty() {
                    println!("No text allocations yet for confinement {id}.");
                } else {
                    println!(
                        "{}",
                        row(&[("BLOCK", 6), ("TEXTS", 6), ("PER TEXT", 8), ("TOTAL", 0)]).dim()
                    );
                    for line in &summary.allocations {
                        println!(
                            "{}",
                            row(&[
                                (&line.block_id.to_string(), 6),
                                (&line.texts_to_do.to_string(), 6),
                                (&line.questions_per_text.to_string(), 8),
                                (&line.total_questions.to_string(), 0),
                            ])
                        );
                    }
                }

                println!();
                println!("requirement questions: {}", summary.requirement_questions);
                println!("allocation questions:  {}", summary.allocation_questions);
                println!("grand total:           {}", summary.grand_total());
            }
            Self::Export { id, out } => {
                let bytes = client.export_confinement(&id).await?;
                std::fs::write(&out, &bytes)?;
                println!(
                    "{} export for {} to {} ({} bytes)",
                    "Wrote".success(),
                    id,
                    out.display(),
                    bytes.len()
                );
            }
            Self::Requirement(command) => return command.run(client).await,
            Self::Text(command) => return command.run(client).await,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::parse_date;

    #[test]
    fn parses_plain_dates_at_midnight_utc() {
        let parsed = parse_date("2026-03-01").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-03-01T00:00:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("yesterday").is_err());
    }
}
