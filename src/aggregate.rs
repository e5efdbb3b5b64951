//! Application-layer operations: turning a completed selection plus
//! quantities into server writes, and summarizing a confinement's records
//! for display.
//!
//! Validation failures here are terminal before any request is built; the
//! server is only consulted with well-formed payloads.

use tracing::instrument;

use crate::{
    api::{Client, Error, Result},
    domain::{
        BlockId, ConfinementBlock, ConfinementBlockId, ConfinementBlockPatch, ConfinementId,
        ConfinementSummary, ConfinementText, ConfinementTextId, ConfinementTextPatch,
        NewBlock, NewConfinement, NewConfinementBlock, NewConfinementText, summarize,
    },
};

/// Creates a requirement for the terminal block of a completed cascade.
///
/// # Errors
///
/// [`Error::Validation`] when no block is selected (no request is made);
/// [`Error::Duplicate`] when the confinement already has a requirement for
/// this block; any other [`Error`] as reported by the server.
#[instrument(level = "debug", skip(client))]
pub async fn create_requirement(
    client: &Client,
    confinement_id: ConfinementId,
    block: Option<BlockId>,
    questions_to_do: u32,
) -> Result<ConfinementBlock> {
    let block_id = block.ok_or_else(|| Error::Validation("a block must be selected".to_string()))?;

    let payload = NewConfinementBlock {
        confinement_id,
        block_id,
        questions_to_do,
    };

    client
        .create::<ConfinementBlock>(&payload)
        .await
        .map_err(|error| match error {
            Error::Duplicate(_) => Error::Duplicate(format!(
                "a requirement for block {block_id} already exists in this confinement"
            )),
            other => other,
        })
}

/// Updates the quantity of an existing requirement. The block and
/// confinement are immutable and are not resent.
///
/// # Errors
///
/// Returns any [`Error`] reported by the server.
#[instrument(level = "debug", skip(client))]
pub async fn update_requirement(
    client: &Client,
    id: ConfinementBlockId,
    questions_to_do: u32,
) -> Result<ConfinementBlock> {
    client
        .update::<ConfinementBlock>(&id, &ConfinementBlockPatch { questions_to_do })
        .await
}

/// Creates a text allocation for the terminal block of a completed
/// cascade.
///
/// # Errors
///
/// [`Error::Validation`] when no block is selected (no request is made);
/// otherwise any [`Error`] reported by the server.
#[instrument(level = "debug", skip(client))]
pub async fn create_allocation(
    client: &Client,
    confinement_id: ConfinementId,
    block: Option<BlockId>,
    texts_to_do: u32,
    questions_per_text: u32,
) -> Result<ConfinementText> {
    let block_id = block.ok_or_else(|| Error::Validation("a block must be selected".to_string()))?;

    let payload = NewConfinementText {
        confinement_id,
        block_id,
        texts_to_do,
        questions_per_text,
    };

    client.create::<ConfinementText>(&payload).await
}

/// Updates the quantities of an existing text allocation. The block
/// selector is disabled after creation, so only the quantities travel.
///
/// # Errors
///
/// Returns any [`Error`] reported by the server.
#[instrument(level = "debug", skip(client))]
pub async fn update_allocation(
    client: &Client,
    id: ConfinementTextId,
    texts_to_do: u32,
    questions_per_text: u32,
) -> Result<ConfinementText> {
    let patch = ConfinementTextPatch {
        texts_to_do,
        questions_per_text,
    };
    client.update::<ConfinementText>(&id, &patch).await
}

/// Fetches a confinement's requirements and allocations and aggregates
/// them for display.
///
/// # Errors
///
/// Returns any [`Error`] reported by the server for either read.
#[instrument(level = "debug", skip(client))]
pub async fn summarize_confinement(
    client: &Client,
    id: &ConfinementId,
) -> Result<ConfinementSummary> {
    let requirements = client.confinement_requirements(id).await?;
    let allocations = client.confinement_allocations(id).await?;

    Ok(summarize(&requirements, &allocations))
}

/// Client-side checks for a block creation payload.
///
/// # Errors
///
/// [`Error::Validation`] when the name is empty.
pub fn validate_block(payload: &NewBlock) -> Result<()> {
    if payload.name.trim().is_empty() {
        return Err(Error::Validation("the block name is required".to_string()));
    }
    Ok(())
}

/// Client-side checks for a confinement payload, mirroring the original
/// form rules.
///
/// # Errors
///
/// [`Error::Validation`] when the name is empty, the total is zero, or
/// the window ends before it starts.
pub fn validate_confinement(payload: &NewConfinement) -> Result<()> {
    if payload.name.trim().is_empty() {
        return Err(Error::Validation(
            "the confinement name is required".to_string(),
        ));
    }
    if payload.total < 1 {
        return Err(Error::Validation(
            "the total must be greater than 0".to_string(),
        ));
    }
    if payload.end_date <= payload.start_date {
        return Err(Error::Validation(
            "the end date must fall after the start date".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::LevelId;

    // A base URL that cannot resolve; validation must reject the input
    // before the client ever builds a request against it.
    fn offline_client() -> Client {
        Client::new("http://invalid.invalid/api").unwrap()
    }

    #[tokio::test]
    async fn missing_block_fails_validation_without_a_request() {
        let client = offline_client();

        let error = create_requirement(&client, ConfinementId("c-1".to_string()), None, 10)
            .await
            .unwrap_err();

        assert!(matches!(error, Error::Validation(_)));
    }

    #[tokio::test]
    async fn missing_block_fails_allocation_validation_without_a_request() {
        let client = offline_client();

        let error = create_allocation(&client, ConfinementId("c-1".to_string()), None, 3, 4)
            .await
            .unwrap_err();

        assert!(matches!(error, Error::Validation(_)));
    }

    #[test]
    fn empty_block_name_is_rejected() {
        let payload = NewBlock {
            name: "   ".to_string(),
            level_id: LevelId(1),
            parent_block_id: None,
        };

        assert!(matches!(
            validate_block(&payload),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn confinement_window_must_be_ordered() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let payload = NewConfinement {
            name: "Ordinario 2026".to_string(),
            total: 80,
            start_date: start,
            end_date: start,
        };

        assert!(matches!(
            validate_confinement(&payload),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn valid_confinement_passes() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        let payload = NewConfinement {
            name: "Ordinario 2026".to_string(),
            total: 80,
            start_date: start,
            end_date: end,
        };

        assert!(validate_confinement(&payload).is_ok());
    }
}
