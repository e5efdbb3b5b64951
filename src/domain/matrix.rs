//! Exam matrices, their per-block details, and the modality/process
//! categorization axes.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::block::BlockId;

/// Identifier of a [`Modality`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ModalityId(pub i64);

impl fmt::Display for ModalityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A categorization axis for matrices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modality {
    /// Server-assigned identifier.
    pub id: ModalityId,
    /// Human-readable name.
    pub name: String,
    /// Server timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Server timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a modality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewModality {
    /// Human-readable name.
    pub name: String,
}

/// Payload for renaming a modality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalityPatch {
    /// The new name.
    pub name: String,
}

/// Identifier of a [`Process`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProcessId(pub i64);

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An admission process; the categorization axis under its other name.
/// Server revisions expose both resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Server-assigned identifier.
    pub id: ProcessId,
    /// Human-readable name.
    pub name: String,
    /// Server timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Server timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProcess {
    /// Human-readable name.
    pub name: String,
}

/// Payload for renaming a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessPatch {
    /// The new name.
    pub name: String,
}

/// Identifier of a [`Matrix`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MatrixId(pub i64);

impl fmt::Display for MatrixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A yearly exam blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    /// Server-assigned identifier.
    pub id: MatrixId,
    /// The exam year, e.g. `"2026"`.
    pub year: String,
    /// Number of answer alternatives per question.
    pub total_alternatives: u32,
    /// The modality this matrix belongs to.
    pub modality_id: ModalityId,
    /// Server timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Server timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMatrix {
    /// The exam year.
    pub year: String,
    /// Number of answer alternatives per question.
    pub total_alternatives: u32,
    /// The modality this matrix belongs to.
    pub modality_id: ModalityId,
}

/// Academic area a matrix detail applies to, in the server's spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Area {
    /// Biomedical sciences.
    #[serde(rename = "BIOMEDICAS")]
    Biomedicas,
    /// Social sciences.
    #[serde(rename = "SOCIALES")]
    Sociales,
    /// Engineering.
    #[serde(rename = "INGENIERIAS")]
    Ingenierias,
    /// Applies to every area.
    #[serde(rename = "TODAS")]
    Todas,
}

impl Area {
    /// The wire spelling of this area.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Biomedicas => "BIOMEDICAS",
            Self::Sociales => "SOCIALES",
            Self::Ingenierias => "INGENIERIAS",
            Self::Todas => "TODAS",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Area {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BIOMEDICAS" => Ok(Self::Biomedicas),
            "SOCIALES" => Ok(Self::Sociales),
            "INGENIERIAS" => Ok(Self::Ingenierias),
            "TODAS" => Ok(Self::Todas),
            other => Err(format!(
                "unknown area '{other}' (expected BIOMEDICAS, SOCIALES, INGENIERIAS or TODAS)"
            )),
        }
    }
}

/// Question difficulty, in the server's spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Easy.
    #[serde(rename = "FACIL")]
    Facil,
    /// Medium.
    #[serde(rename = "MEDIO")]
    Medio,
    /// Hard.
    #[serde(rename = "DIFICIL")]
    Dificil,
}

impl Difficulty {
    /// The wire spelling of this difficulty.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facil => "FACIL",
            Self::Medio => "MEDIO",
            Self::Dificil => "DIFICIL",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FACIL" => Ok(Self::Facil),
            "MEDIO" => Ok(Self::Medio),
            "DIFICIL" => Ok(Self::Dificil),
            other => Err(format!(
                "unknown difficulty '{other}' (expected FACIL, MEDIO or DIFICIL)"
            )),
        }
    }
}

/// Identifier of a [`MatrixDetail`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MatrixDetailId(pub i64);

impl fmt::Display for MatrixDetailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A matrix's per-block breakdown by area and difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixDetail {
    /// Server-assigned identifier.
    pub id: MatrixDetailId,
    /// The matrix this detail belongs to.
    pub matrix_id: MatrixId,
    /// The block the questions are drawn from.
    pub block_id: BlockId,
    /// Academic area this row applies to.
    pub area: Area,
    /// Difficulty of the questions in this row.
    pub difficulty: Difficulty,
    /// Questions the blueprint calls for.
    pub questions_required: u32,
    /// Questions actually commissioned.
    pub questions_to_do: u32,
    /// Server timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Server timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a matrix detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMatrixDetail {
    /// The matrix this detail belongs to.
    pub matrix_id: MatrixId,
    /// The block the questions are drawn from.
    pub block_id: BlockId,
    /// Academic area this row applies to.
    pub area: Area,
    /// Difficulty of the questions in this row.
    pub difficulty: Difficulty,
    /// Questions the blueprint calls for.
    pub questions_required: u32,
    /// Questions actually commissioned.
    pub questions_to_do: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_round_trips_through_the_wire_spelling() {
        let json = serde_json::to_string(&Area::Biomedicas).unwrap();
        assert_eq!(json, "\"BIOMEDICAS\"");

        let parsed: Area = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Area::Biomedicas);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("facil".parse::<Difficulty>().unwrap(), Difficulty::Facil);
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
