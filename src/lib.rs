//! Back-office client for the exam-generator service.
//!
//! All records live on the remote HTTP API; this crate holds typed copies,
//! the block-hierarchy and cascading-selection logic used by the
//! requirement forms, and a thin pass-through client for the CRUD
//! endpoints.

pub mod domain;
pub use domain::{Block, BlockId, BlockIndex, Cascade, ConfinementId, ConfinementSummary};

/// Access to the remote API.
pub mod api;
pub use api::{Client, Error, Resource, Result, WritableResource};

/// Requirement/allocation writes and the confinement summary read.
pub mod aggregate;

/// Locally persisted settings.
pub mod settings;
pub use settings::Settings;
