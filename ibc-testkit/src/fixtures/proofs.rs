//! ICS-23 proofs over single-leaf stores, checked by the mock light client
//! against [`simple_proof_specs`].
use ibc_app_interchain_query::types::merkle::ProofSpecs;
use ibc_primitives::prelude::*;
use ics23::commitment_proof::Proof;
use ics23::{CommitmentProof, ExistenceProof, HostFunctionsManager, NonExistenceProof};
use prost::Message;
use tendermint_proto::v0_38::crypto::{ProofOp, ProofOps};

const PROOF_OP_TYPE: &str = "ics23:simple";

/// Key of the only entry of a store proven not to contain another key.
/// Absent keys must sort after it.
pub const NEIGHBOUR_KEY: &[u8] = &[0x00];

pub const NEIGHBOUR_VALUE: &[u8] = b"neighbour";

/// Specs of a substore under a root store, both simple Merkle trees.
pub fn simple_proof_specs() -> ProofSpecs {
    vec![ics23::tendermint_spec(), ics23::tendermint_spec()].into()
}

/// A commitment root together with the proof relayers submit for it.
#[derive(Clone, Debug)]
pub struct StoreProof {
    pub root: Vec<u8>,
    pub proof_ops: ProofOps,
}

fn leaf(key: &[u8], value: &[u8]) -> ExistenceProof {
    ExistenceProof {
        key: key.to_vec(),
        value: value.to_vec(),
        leaf: ics23::tendermint_spec().leaf_spec,
        path: vec![],
    }
}

fn root_of(proof: &ExistenceProof) -> Vec<u8> {
    ics23::calculate_existence_root::<HostFunctionsManager>(proof)
        .expect("single leaf proofs have a root")
}

fn proof_op(key: &[u8], proof: Proof) -> ProofOp {
    ProofOp {
        r#type: PROOF_OP_TYPE.to_string(),
        key: key.to_vec(),
        data: CommitmentProof { proof: Some(proof) }.encode_to_vec(),
    }
}

/// Proves `substore` to commit to `subroot` and assembles the proof ops,
/// leaf level first.
fn commit_substore(substore: &str, subroot: Vec<u8>, leaf_op: ProofOp) -> StoreProof {
    let store = leaf(substore.as_bytes(), &subroot);
    let root = root_of(&store);

    StoreProof {
        root,
        proof_ops: ProofOps {
            ops: vec![leaf_op, proof_op(substore.as_bytes(), Proof::Exist(store))],
        },
    }
}

/// Proof that `key` maps to `value` in `substore`.
pub fn membership_proof(substore: &str, key: &[u8], value: &[u8]) -> StoreProof {
    let existence = leaf(key, value);
    let subroot = root_of(&existence);

    commit_substore(substore, subroot, proof_op(key, Proof::Exist(existence)))
}

/// Proof that `key` is absent from `substore`.
pub fn non_membership_proof(substore: &str, key: &[u8]) -> StoreProof {
    assert!(key > NEIGHBOUR_KEY, "absent keys must sort after the neighbour");

    let neighbour = leaf(NEIGHBOUR_KEY, NEIGHBOUR_VALUE);
    let subroot = root_of(&neighbour);
    let non_existence = NonExistenceProof {
        key: key.to_vec(),
        left: Some(neighbour),
        right: None,
    };

    commit_substore(
        substore,
        subroot,
        proof_op(key, Proof::Nonexist(non_existence)),
    )
}
