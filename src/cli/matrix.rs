//! Matrix and matrix-detail subcommands.

use clap::Parser;
use examgen::{
    Client,
    domain::{
        Area, BlockId, Difficulty, Matrix, MatrixDetail, MatrixDetailId, MatrixId, ModalityId,
        NewMatrix, NewMatrixDetail,
    },
};
use tracing::instrument;

use super::terminal::{Colorize, row};

/// Parses an area in the server's spelling, case-insensitively.
fn parse_area(s: &str) -> Result<Area, String> {
    s.parse()
}

/// Parses a difficulty in the server's spelling, case-insensitively.
fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    s.parse()
}

/// Verbs over matrices.
#[derive(Debug, Parser)]
pub enum MatrixCommand {
    /// List all matrices
    List,

    /// Create a matrix
    Add {
        /// The exam year, e.g. 2026
        year: String,

        /// Number of answer alternatives per question
        #[arg(long)]
        alternatives: u32,

        /// The modality the matrix belongs to
        #[arg(long)]
        modality: i64,
    },

    /// Update a matrix
    Update {
        /// The matrix id
        id: i64,

        /// The exam year
        year: String,

        /// Number of answer alternatives per question
        #[arg(long)]
        alternatives: u32,

        /// The modality the matrix belongs to
        #[arg(long)]
        modality: i64,
    },

    /// Delete a matrix
    Remove {
        /// The matrix id
        id: i64,
    },

    /// Manage a matrix's per-block details
    #[command(subcommand)]
    Detail(DetailCommand),
}

/// Verbs over matrix details.
#[derive(Debug, Parser)]
pub enum DetailCommand {
    /// List details, optionally restricted to one matrix
    List {
        /// Only show details of this matrix
        #[arg(long)]
        matrix: Option<i64>,
    },

    /// Create a detail row
    Add {
        /// The matrix the detail belongs to
        #[arg(long)]
        matrix: i64,

        /// The block questions are drawn from
        #[arg(long)]
        block: i64,

        /// Academic area (BIOMEDICAS, SOCIALES, INGENIERIAS, TODAS)
        #[arg(long, value_parser = parse_area)]
        area: Area,

        /// Difficulty (FACIL, MEDIO, DIFICIL)
        #[arg(long, value_parser = parse_difficulty)]
        difficulty: Difficulty,

        /// Questions the blueprint calls for
        #[arg(long)]
        required: u32,

        /// Questions actually commissioned
        #[arg(long)]
        to_do: u32,
    },

    /// Update a detail row
    Update {
        /// The detail id
        id: i64,

        /// The matrix the detail belongs to
        #[arg(long)]
        matrix: i64,

        /// The block questions are drawn from
        #[arg(long)]
        block: i64,

        /// Academic area (BIOMEDICAS, SOCIALES, INGENIERIAS, TODAS)
        #[arg(long, value_parser = parse_area)]
        area: Area,

        /// Difficulty (FACIL, MEDIO, DIFICIL)
        #[arg(long, value_parser = parse_difficulty)]
        difficulty: Difficulty,

        /// Questions the blueprint calls for
        #[arg(long)]
        required: u32,

        /// Questions actually commissioned
        #[arg(long)]
        to_do: u32,
    },

    /// Delete a detail row
    Remove {
        /// The detail id
        id: i64,
    },
}

impl MatrixCommand {
    /// Executes the verb against the API.
    #[instrument(level = "debug", skip(self, client))]
    pub async fn run(self, client: &Client) -> anyhow::Result<()> {
        match self {
            Self::List => {
                let matrices: Vec<Matrix> = client.list().await?;
                if matrices.is_empty() {
                    println!("No matrices yet.");
                    return Ok(());
                }

                println!(
                    "{}",
                    row(&[("ID", 5), ("YEAR", 6), ("ALTS", 5), ("MODALITY", 0)]).dim()
                );
                for matrix in matrices {
                    println!(
                        "{}",
                        row(&[
                            (&matrix.id.to_string(), 5),
                            (&matrix.year, 6),
                            (&matrix.total_alternatives.to_string(), 5),
                            (&matrix.modality_id.to_string(), 0),
                        ])
                    );
                }
            }
            Self::Add {
                year,
                alternatives,
                modality,
            } => {
                let payload = NewMatrix {
                    year,
                    total_alternatives: alternatives,
                    modality_id: ModalityId(modality),
                };
                let created: Matrix = client.create(&payload).await?;
                println!(
                    "{} matrix for {} ({})",
                    "Created".success(),
                    created.year,
                    created.id
                );
            }
            Self::Update {
                id,
                year,
                alternatives,
                modality,
            } => {
                let payload = NewMatrix {
                    year,
                    total_alternatives: alternatives,
                    modality_id: ModalityId(modality),
                };
                let updated: Matrix = client.update(&MatrixId(id), &payload).await?;
                println!(
                    "{} matrix for {} ({id})",
                    "Updated".success(),
                    updated.year
                );
            }
            Self::Remove { id } => {
                client.delete::<Matrix>(&MatrixId(id)).await?;
                println!("{} matrix {id}", "Deleted".success());
            }
            Self::Detail(command) => return command.run(client).await,
        }
        Ok(())
    }
}

impl DetailCommand {
    /// Executes the verb against the API.
    #[instrument(level = "debug", skip(self, client))]
    pub async fn run(self, client: &Client) -> anyhow::Result<()> {
        match self {
            Self::List { matrix } => {
                let details: Vec<MatrixDetail> = client.list().await?;
                let wanted = matrix.map(MatrixId);
                let details: Vec<_> = details
                    .into_iter()
                    .filter(|detail| wanted.is_none_or(|id| detail.matrix_id == id))
                    .collect();

                if details.is_empty() {
                    println!("No matrix details found.");
                    return Ok(());
                }

                println!(
                    "{}",
                    row(&[
                        ("ID", 5),
                        ("MATRIX", 6),
                        ("BLOCK", 6),
                        ("AREA", 12),
                        ("DIFFICULTY", 10),
                        ("REQUIRED", 8),
                        ("TO DO", 0),
                    ])
                    .dim()
                );
                for detail in details {
                    println!(
                        "{}",
                        row(&[
                            (&detail.id.to_string(), 5),
                            (&detail.matrix_id.to_string(), 6),
                            (&detail.block_id.to_string(), 6),
                            (detail.area.as_str(), 12),
                            (detail.difficulty.as_str(), 10),
                            (&detail.questions_required.to_string(), 8),
                            (&detail.questions_to_do.to_string(), 0),
                        ])
                    );
                }
            }
            Self::Add {
                matrix,
                block,
                area,
                difficulty,
                required,
                to_do,
            } => {
                let payload = NewMatrixDetail {
                    matrix_id: MatrixId(matrix),
                    block_id: BlockId(block),
                    area,
                    difficulty,
                    questions_required: required,
                    questions_to_do: to_do,
                };
                let created: MatrixDetail = client.create(&payload).await?;
                println!("{} matrix detail ({})", "Created".success(), created.id);
            }
            Self::Update {
                id,
                matrix,
                block,
                area,
                difficulty,
                required,
                to_do,
            } => {
                let payload = NewMatrixDetail {
                    matrix_id: MatrixId(matrix),
                    block_id: BlockId(block),
                    area,
                    difficulty,
                    questions_required: required,
                    questions_to_do: to_do,
                };
                let _updated: MatrixDetail =
                    client.update(&MatrixDetailId(id), &payload).await?;
                println!("{} matrix detail {id}", "Updated".success());
            }
            Self::Remove { id } => {
                client.delete::<MatrixDetail>(&MatrixDetailId(id)).await?;
                println!("{} matrix detail {id}", "Deleted".success());
            }
        }
        Ok(())
    }
}
