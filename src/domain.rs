//! Domain models for the exam-generator back office.
//!
//! These are typed copies of the records owned by the remote API, plus the
//! pure structures derived from them: the block hierarchy index, the
//! cascading selection path, and the display-time summary. Nothing in this
//! module performs I/O.

/// Blocks and levels.
pub mod block;
pub use block::{Block, BlockId, BlockPatch, Level, LevelId, LevelPatch, NewBlock, NewLevel};

/// The parent → children index over the flat block collection.
pub mod hierarchy;
pub use hierarchy::BlockIndex;

/// The cascading selector state machine.
pub mod selection;
pub use selection::Cascade;

/// The read-only collaborator roster.
pub mod collaborator;
pub use collaborator::{Collaborator, CollaboratorId};

/// Confinements, requirements and text allocations.
pub mod confinement;
pub use confinement::{
    Confinement, ConfinementBlock, ConfinementBlockId, ConfinementBlockPatch, ConfinementId,
    ConfinementText, ConfinementTextId, ConfinementTextPatch, NewConfinement,
    NewConfinementBlock, NewConfinementText,
};

/// Matrices, details, and the modality/process axes.
pub mod matrix;
pub use matrix::{
    Area, Difficulty, Matrix, MatrixDetail, MatrixDetailId, MatrixId, Modality, ModalityId,
    ModalityPatch, NewMatrix, NewMatrixDetail, NewModality, NewProcess, Process, ProcessId,
    ProcessPatch,
};

/// Display-time aggregation.
pub mod summary;
pub use summary::{AllocationLine, ConfinementSummary, summarize};
