//! Entity descriptors for the generic CRUD client.
//!
//! Each API resource contributes one [`Resource`] implementation instead
//! of a hand-rolled wrapper module, so the client exposes a single
//! list/get/create/update/delete surface for all of them.

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

use crate::domain::{
    Block, BlockId, BlockPatch, Collaborator, CollaboratorId, Confinement, ConfinementBlock,
    ConfinementBlockId, ConfinementBlockPatch, ConfinementId, ConfinementText,
    ConfinementTextId, ConfinementTextPatch, Level, LevelId, LevelPatch, Matrix, MatrixDetail,
    MatrixDetailId, MatrixId, Modality, ModalityId, ModalityPatch, NewBlock, NewConfinement,
    NewConfinementBlock, NewConfinementText, NewLevel, NewMatrix, NewMatrixDetail, NewModality,
    NewProcess, Process, ProcessId, ProcessPatch,
};

/// An entity the remote API serves under a flat collection path.
///
/// This base trait covers the reads only; entities the client may also
/// write implement [`WritableResource`] on top. Read-only resources
/// (collaborators) stop here, so the write half of the client is not
/// callable for them.
pub trait Resource: DeserializeOwned {
    /// Collection path under the API root, e.g. `"blocks"`.
    const PATH: &'static str;

    /// Singular entity name, used in messages.
    const NAME: &'static str;

    /// The identifier type, rendered into item paths.
    type Id: fmt::Display;
}

/// A [`Resource`] the client may create, update and delete.
pub trait WritableResource: Resource {
    /// The creation payload.
    type New: Serialize;

    /// The update payload.
    type Patch: Serialize;
}

impl Resource for Block {
    const PATH: &'static str = "blocks";
    const NAME: &'static str = "block";
    type Id = BlockId;
}

impl WritableResource for Block {
    type New = NewBlock;
    type Patch = BlockPatch;
}

impl Resource for Level {
    const PATH: &'static str = "levels";
    const NAME: &'static str = "level";
    type Id = LevelId;
}

impl WritableResource for Level {
    type New = NewLevel;
    type Patch = LevelPatch;
}

impl Resource for Modality {
    const PATH: &'static str = "modalities";
    const NAME: &'static str = "modality";
    type Id = ModalityId;
}

impl WritableResource for Modality {
    type New = NewModality;
    type Patch = ModalityPatch;
}

impl Resource for Process {
    const PATH: &'static str = "processes";
    const NAME: &'static str = "process";
    type Id = ProcessId;
}

impl WritableResource for Process {
    type New = NewProcess;
    type Patch = ProcessPatch;
}

impl Resource for Matrix {
    const PATH: &'static str = "matrices";
    const NAME: &'static str = "matrix";
    type Id = MatrixId;
}

impl WritableResource for Matrix {
    type New = NewMatrix;
    // Matrices are updated with the full field set.
    type Patch = NewMatrix;
}

impl Resource for MatrixDetail {
    const PATH: &'static str = "matrix_details";
    const NAME: &'static str = "matrix detail";
    type Id = MatrixDetailId;
}

impl WritableResource for MatrixDetail {
    type New = NewMatrixDetail;
    type Patch = NewMatrixDetail;
}

impl Resource for Confinement {
    const PATH: &'static str = "confinements";
    const NAME: &'static str = "confinement";
    type Id = ConfinementId;
}

impl WritableResource for Confinement {
    type New = NewConfinement;
    type Patch = NewConfinement;
}

impl Resource for ConfinementBlock {
    const PATH: &'static str = "confinement_blocks";
    const NAME: &'static str = "requirement";
    type Id = ConfinementBlockId;
}

impl WritableResource for ConfinementBlock {
    type New = NewConfinementBlock;
    type Patch = ConfinementBlockPatch;
}

impl Resource for ConfinementText {
    const PATH: &'static str = "confinement_texts";
    const NAME: &'static str = "text allocation";
    type Id = ConfinementTextId;
}

impl WritableResource for ConfinementText {
    type New = NewConfinementText;
    type Patch = ConfinementTextPatch;
}

// The roster is managed elsewhere; deliberately not WritableResource.
impl Resource for Collaborator {
    const PATH: &'static str = "collaborators";
    const NAME: &'static str = "collaborator";
    type Id = CollaboratorId;
}

/// Resources whose editable surface is a single display name.
///
/// Lets the CLI run modalities and processes through one generic
/// implementation instead of a copy per entity.
pub trait NamedResource: WritableResource {
    /// Builds an identifier from its raw integer form.
    fn id_from(raw: i64) -> Self::Id;

    /// Builds the creation payload from a name.
    fn create_payload(name: String) -> Self::New;

    /// Builds the rename payload from a name.
    fn rename_payload(name: String) -> Self::Patch;

    /// The record's display name.
    fn display_name(&self) -> &str;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;
}

impl NamedResource for Modality {
    fn id_from(raw: i64) -> ModalityId {
        ModalityId(raw)
    }

    fn create_payload(name: String) -> NewModality {
        NewModality { name }
    }

    fn rename_payload(name: String) -> ModalityPatch {
        ModalityPatch { name }
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &ModalityId {
        &self.id
    }
}

impl NamedResource for Process {
    fn id_from(raw: i64) -> ProcessId {
        ProcessId(raw)
    }

    fn create_payload(name: String) -> NewProcess {
        NewProcess { name }
    }

    fn rename_payload(name: String) -> ProcessPatch {
        ProcessPatch { name }
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &ProcessId {
        &self.id
    }
}
