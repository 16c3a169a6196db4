//! Merkle proof utilities

use ibc_primitives::prelude::*;
use ics23::commitment_proof::Proof;
use ics23::{
    calculate_existence_root, verify_membership, verify_non_membership, CommitmentProof,
    HostFunctionsProvider, NonExistenceProof, ProofSpec,
};
use tendermint_proto::v0_38::crypto::ProofOps;

use crate::error::CommitmentError;

/// The proof specs of the stores a chain commits to, ordered leaf-to-root.
#[derive(Clone, Debug, PartialEq)]
pub struct ProofSpecs(Vec<ProofSpec>);

impl ProofSpecs {
    /// The specs of a Cosmos SDK chain: an IAVL substore under a simple
    /// Tendermint multistore.
    pub fn cosmos() -> Self {
        vec![ics23::iavl_spec(), ics23::tendermint_spec()].into()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProofSpec> {
        self.0.iter()
    }
}

impl From<Vec<ProofSpec>> for ProofSpecs {
    fn from(specs: Vec<ProofSpec>) -> Self {
        Self(specs)
    }
}

/// Keys from the root store down to the leaf: `[substore, key]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerklePath {
    pub key_path: Vec<Vec<u8>>,
}

impl MerklePath {
    pub fn new(substore: &str, key: &[u8]) -> Self {
        Self {
            key_path: vec![substore.as_bytes().to_vec(), key.to_vec()],
        }
    }
}

/// One commitment proof per level of a [`MerklePath`], leaf first.
#[derive(Clone, Debug, PartialEq)]
pub struct MerkleProof {
    pub proofs: Vec<CommitmentProof>,
}

impl TryFrom<&ProofOps> for MerkleProof {
    type Error = CommitmentError;

    fn try_from(proof_ops: &ProofOps) -> Result<Self, Self::Error> {
        let mut proofs = Vec::with_capacity(proof_ops.ops.len());

        for op in &proof_ops.ops {
            let mut parsed = CommitmentProof { proof: None };
            prost::Message::merge(&mut parsed, op.data.as_slice())
                .map_err(CommitmentError::CommitmentProofDecodingFailed)?;

            proofs.push(parsed);
        }

        Ok(Self { proofs })
    }
}

impl MerkleProof {
    fn check_shape(
        &self,
        specs: &ProofSpecs,
        root: &[u8],
        keys: &MerklePath,
    ) -> Result<(), CommitmentError> {
        if self.proofs.is_empty() {
            return Err(CommitmentError::EmptyMerkleProof);
        }
        if root.is_empty() {
            return Err(CommitmentError::EmptyMerkleRoot);
        }
        if specs.is_empty() {
            return Err(CommitmentError::EmptyProofSpecs);
        }
        let num = self.proofs.len();
        if specs.len() != num {
            return Err(CommitmentError::NumberOfSpecsMismatch);
        }
        if keys.key_path.len() != num {
            return Err(CommitmentError::NumberOfKeysMismatch);
        }
        Ok(())
    }

    pub fn verify_membership<H: HostFunctionsProvider>(
        &self,
        specs: &ProofSpecs,
        root: &[u8],
        keys: &MerklePath,
        value: Vec<u8>,
        start_index: usize,
    ) -> Result<(), CommitmentError> {
        self.check_shape(specs, root, keys)?;
        if value.is_empty() {
            return Err(CommitmentError::EmptyVerifiedValue);
        }

        let mut subroot = value.clone();
        let mut value = value;
        // keys are represented from root-to-leaf
        for ((proof, spec), key) in self
            .proofs
            .iter()
            .zip(specs.iter())
            .zip(keys.key_path.iter().rev())
            .skip(start_index)
        {
            match &proof.proof {
                Some(Proof::Exist(existence_proof)) => {
                    subroot = calculate_existence_root::<H>(existence_proof)
                        .map_err(|_| CommitmentError::InvalidMerkleProof)?;

                    if !verify_membership::<H>(proof, spec, &subroot, key, &value) {
                        return Err(CommitmentError::VerificationFailure);
                    }
                    value.clone_from(&subroot);
                }
                _ => return Err(CommitmentError::InvalidMerkleProof),
            }
        }

        if root != subroot.as_slice() {
            return Err(CommitmentError::VerificationFailure);
        }

        Ok(())
    }

    pub fn verify_non_membership<H: HostFunctionsProvider>(
        &self,
        specs: &ProofSpecs,
        root: &[u8],
        keys: &MerklePath,
    ) -> Result<(), CommitmentError> {
        self.check_shape(specs, root, keys)?;

        // verify the absence of key in lowest subtree
        let proof = self
            .proofs
            .first()
            .ok_or(CommitmentError::InvalidMerkleProof)?;
        let spec = specs.iter().next().ok_or(CommitmentError::InvalidMerkleProof)?;
        let key = keys
            .key_path
            .last()
            .ok_or(CommitmentError::InvalidMerkleProof)?;

        match &proof.proof {
            Some(Proof::Nonexist(non_existence_proof)) => {
                let subroot = calculate_non_existence_root::<H>(non_existence_proof)?;

                if !verify_non_membership::<H>(proof, spec, &subroot, key) {
                    return Err(CommitmentError::VerificationFailure);
                }

                if self.proofs.len() == 1 {
                    return if root == subroot.as_slice() {
                        Ok(())
                    } else {
                        Err(CommitmentError::VerificationFailure)
                    };
                }

                // the remaining levels prove the subtree root up to the root
                self.verify_membership::<H>(specs, root, keys, subroot, 1)
            }
            _ => Err(CommitmentError::InvalidMerkleProof),
        }
    }
}

fn calculate_non_existence_root<H: HostFunctionsProvider>(
    proof: &NonExistenceProof,
) -> Result<Vec<u8>, CommitmentError> {
    if let Some(left) = &proof.left {
        calculate_existence_root::<H>(left).map_err(|_| CommitmentError::InvalidMerkleProof)
    } else if let Some(right) = &proof.right {
        calculate_existence_root::<H>(right).map_err(|_| CommitmentError::InvalidMerkleProof)
    } else {
        Err(CommitmentError::InvalidMerkleProof)
    }
}
