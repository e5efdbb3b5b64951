//! Command-line interface for the exam-generator back office.

use std::path::PathBuf;

use clap::ArgAction;
use examgen::{Client, Settings};

mod block;
mod catalog;
mod collaborator;
mod confinement;
mod config;
mod level;
mod matrix;
mod requirement;
mod terminal;
mod text;

/// Top-level argument parser.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the settings file
    #[arg(short, long, default_value = ".examgen.toml", global = true)]
    settings: PathBuf,

    /// Override the API base URL from the settings file
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Runs the selected command.
    pub async fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let settings =
            Settings::load_or_default(&self.settings).map_err(|e| anyhow::anyhow!(e))?;

        // Settings commands work on the file alone; everything else talks
        // to the API.
        let command = match self.command {
            Command::Config(command) => return command.run(&self.settings, settings),
            command => command,
        };

        let base_url = self.base_url.unwrap_or(settings.base_url);
        let client = Client::new(base_url)?;

        match command {
            Command::Block(command) => command.run(&client).await,
            Command::Level(command) => command.run(&client).await,
            Command::Modality(command) => {
                catalog::run::<examgen::domain::Modality>(&client, command).await
            }
            Command::Process(command) => {
                catalog::run::<examgen::domain::Process>(&client, command).await
            }
            Command::Matrix(command) => command.run(&client).await,
            Command::Confinement(command) => command.run(&client).await,
            Command::Collaborator(command) => command.run(&client).await,
            Command::Config(_) => unreachable!("handled above"),
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// The command tree, one branch per entity.
#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Manage the hierarchical content blocks
    #[command(subcommand)]
    Block(block::BlockCommand),

    /// Manage levels (the ordered stage classification)
    #[command(subcommand)]
    Level(level::LevelCommand),

    /// Manage modalities
    #[command(subcommand)]
    Modality(catalog::CatalogCommand),

    /// Manage admission processes
    #[command(subcommand)]
    Process(catalog::CatalogCommand),

    /// Manage exam matrices and their details
    #[command(subcommand)]
    Matrix(matrix::MatrixCommand),

    /// Manage confinements, requirements and text allocations
    #[command(subcommand)]
    Confinement(confinement::ConfinementCommand),

    /// Browse the read-only collaborator roster
    #[command(subcommand)]
    Collaborator(collaborator::CollaboratorCommand),

    /// Show or modify local settings
    #[command(subcommand)]
    Config(config::ConfigCommand),
}
