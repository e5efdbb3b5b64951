//! Settings subcommands.

use std::path::Path;

use clap::Parser;
use examgen::Settings;
use tracing::instrument;

use super::terminal::Colorize;

/// Verbs over the local settings file.
#[derive(Debug, Parser)]
pub enum ConfigCommand {
    /// Show the current settings
    Show,

    /// Change settings and write them back
    Set {
        /// The API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Whether the navigation sidebar starts open
        #[arg(long)]
        sidebar_open: Option<bool>,
    },
}

impl ConfigCommand {
    /// Executes the verb against the settings file.
    #[instrument(level = "debug", skip(self, settings))]
    pub fn run(self, path: &Path, mut settings: Settings) -> anyhow::Result<()> {
        match self {
            Self::Show => {
                println!("base_url:     {}", settings.base_url);
                println!("sidebar_open: {}", settings.sidebar_open);
            }
            Self::Set {
                base_url,
                sidebar_open,
            } => {
                if base_url.is_none() && sidebar_open.is_none() {
                    anyhow::bail!("nothing to change; pass --base-url or --sidebar-open");
                }

                if let Some(base_url) = base_url {
                    settings.base_url = base_url;
                }
                if let Some(sidebar_open) = sidebar_open {
                    settings.sidebar_open = sidebar_open;
                }

                settings.save(path).map_err(|e| anyhow::anyhow!(e))?;
                println!("{} settings to {}", "Saved".success(), path.display());
            }
        }
        Ok(())
    }
}
