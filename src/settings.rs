//! Locally persisted settings.
//!
//! The only durable client-side state: the API base URL and the
//! UI-preference flag for the navigation sidebar.
//!
//! Settings are an explicit, injectable object with a load/save contract
//! rather than ambient global state, so they can be swapped in tests.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Client settings persisted as a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Settings {
    /// Root of the remote API, e.g. `http://localhost:8000/api`.
    pub base_url: String,

    /// Whether the navigation sidebar starts open.
    ///
    /// Carried over from the original client, which persisted it across
    /// sessions; kept here so the preference survives the same way.
    pub sidebar_open: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sidebar_open: true,
        }
    }
}

impl Settings {
    /// Loads the settings from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content
    /// is invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse settings file: {e}"))
    }

    /// Loads the settings, falling back to defaults when the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the settings to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or the file
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write settings file: {e}"))
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

const fn default_sidebar_open() -> bool {
    true
}

/// The serialized versions of the settings.
/// Allows the on-disk format and the domain type to evolve independently.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_base_url")]
        base_url: String,

        #[serde(default = "default_sidebar_open")]
        sidebar_open: bool,
    },
}

impl From<Versions> for Settings {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                base_url,
                sidebar_open,
            } => Self {
                base_url,
                sidebar_open,
            },
        }
    }
}

impl From<Settings> for Versions {
    fn from(settings: Settings) -> Self {
        Self::V1 {
            base_url: settings.base_url,
            sidebar_open: settings.sidebar_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nbase_url = \"https://exams.example/api\"\nsidebar_open = false\n",
        )
        .unwrap();

        let settings = Settings::load(file.path()).unwrap();

        assert_eq!(settings.base_url, "https://exams.example/api");
        assert!(!settings.sidebar_open);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Settings::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read settings file:"));
    }

    #[test]
    fn load_or_default_tolerates_a_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let settings = Settings::load_or_default(&missing).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn round_trips_through_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.toml");

        let settings = Settings {
            base_url: "https://exams.example/api".to_string(),
            sidebar_open: false,
        };
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn empty_version_header_returns_defaults() {
        let actual: Settings = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, Settings::default());
    }
}
