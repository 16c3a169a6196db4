use ibc_app_interchain_query::types::msgs::MsgSubmitQueryResponse;
use ibc_app_interchain_query::types::Query;
use ibc_core_client_types::Height;
use ibc_primitives::prelude::*;

use crate::context::{MockConsensusState, MockContext};
use crate::fixtures::proofs::{membership_proof, non_membership_proof};

pub const RELAYER_ADDRESS: &str = "stride1relayer";

/// Returns the answer a relayer would submit for `query`, read at
/// `remote_height`, for testing purposes only!
///
/// The light client of the query's connection is updated with the
/// consensus state committing to the answer. An empty `result` is proven
/// absent.
pub fn dummy_query_response(
    ctx: &mut MockContext,
    query: &Query,
    remote_height: u64,
    result: Vec<u8>,
) -> MsgSubmitQueryResponse {
    let store = query
        .query_type
        .store_name()
        .expect("proof carrying query type");
    let proof = if result.is_empty() {
        non_membership_proof(store, &query.request)
    } else {
        membership_proof(store, &query.request, &result)
    };

    let height = Height::new(query.chain_id.revision_number(), remote_height + 1)
        .expect("Never fails");
    let timestamp = ctx.host_timestamp;
    ctx.store_consensus_state(
        &query.connection_id,
        height,
        MockConsensusState {
            root: proof.root,
            timestamp,
        },
    );

    MsgSubmitQueryResponse {
        chain_id: query.chain_id.clone(),
        query_id: query.id.clone(),
        result,
        proof_ops: Some(proof.proof_ops),
        height: i64::try_from(remote_height).expect("Never fails"),
        signer: RELAYER_ADDRESS.to_string().into(),
    }
}
