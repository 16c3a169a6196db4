//! Verification of query answers against the light client of the queried chain.

use ibc_app_interchain_query_types::error::InterchainQueryError;
use ibc_app_interchain_query_types::merkle::{MerklePath, MerkleProof};
use ibc_app_interchain_query_types::msgs::MsgSubmitQueryResponse;
use ibc_app_interchain_query_types::Query;
use ibc_core_client_types::Height;
use ibc_primitives::prelude::*;
use ics23::HostFunctionsManager;
use tracing::info;

use crate::context::ConsensusStateProvider;

/// Height of the consensus state committing to a value read at
/// `remote_height`: the app hash of block `h` is only committed in block `h + 1`.
pub fn proof_height(query: &Query, remote_height: i64) -> Result<Height, InterchainQueryError> {
    let invalid = || InterchainQueryError::InvalidHeight {
        height: remote_height,
    };

    let remote_height = u64::try_from(remote_height).map_err(|_| invalid())?;
    let revision_height = remote_height.checked_add(1).ok_or_else(invalid)?;

    Height::new(query.chain_id.revision_number(), revision_height).map_err(|_| invalid())
}

/// Verifies the answer to a proof-carrying query.
///
/// An empty result must come with a proof that the requested key is absent;
/// any other result with a proof that the key maps to exactly that value.
/// Returns the timestamp of the consensus state the answer was proven
/// against, or `None` when the query type carries no proof.
pub fn verify_query_response<Ctx>(
    ctx: &Ctx,
    query: &Query,
    msg: &MsgSubmitQueryResponse,
) -> Result<Option<u64>, InterchainQueryError>
where
    Ctx: ConsensusStateProvider,
{
    if !query.query_type.requires_proof() {
        return Ok(None);
    }

    let proof_ops = msg
        .proof_ops
        .as_ref()
        .ok_or_else(|| InterchainQueryError::MissingProof {
            query_id: query.id.clone(),
        })?;

    let height = proof_height(query, msg.height)?;

    let latest = ctx.latest_height(&query.connection_id)?;
    if height > latest {
        return Err(InterchainQueryError::ClientBehind {
            connection_id: query.connection_id.to_string(),
            height: height.to_string(),
            latest: latest.to_string(),
        });
    }

    let root = ctx.consensus_root(&query.connection_id, &height)?;
    let specs = ctx.proof_specs(&query.connection_id)?;
    let timestamp = ctx.consensus_timestamp(&query.connection_id, &height)?;

    let store = query
        .query_type
        .store_name()
        .ok_or_else(|| InterchainQueryError::InvalidQueryType {
            query_type: query.query_type.to_string(),
        })?;
    let path = MerklePath::new(store, &query.request);
    let proof = MerkleProof::try_from(proof_ops)?;

    if msg.result.is_empty() {
        proof.verify_non_membership::<HostFunctionsManager>(&specs, &root, &path)?;
        info!(query_id = %query.id, %height, "non-inclusion proof validated");
    } else {
        proof.verify_membership::<HostFunctionsManager>(
            &specs,
            &root,
            &path,
            msg.result.clone(),
            0,
        )?;
        info!(query_id = %query.id, %height, "inclusion proof validated");
    }

    Ok(Some(timestamp))
}
