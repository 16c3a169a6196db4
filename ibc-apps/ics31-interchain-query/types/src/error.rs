//! Defines the interchain query error types
use displaydoc::Display;
use ibc_core_host_types::error::IdentifierError;
use ibc_primitives::prelude::*;

use crate::QueryId;

/// Errors raised while checking an ICS-23 Merkle proof.
#[derive(Debug, Display)]
pub enum CommitmentError {
    /// empty merkle proof
    EmptyMerkleProof,
    /// empty merkle root
    EmptyMerkleRoot,
    /// empty verified value
    EmptyVerifiedValue,
    /// empty proof specs
    EmptyProofSpecs,
    /// mismatch between the number of proofs with that of specs
    NumberOfSpecsMismatch,
    /// mismatch between the number of proofs with that of keys
    NumberOfKeysMismatch,
    /// invalid merkle proof
    InvalidMerkleProof,
    /// proof verification failed
    VerificationFailure,
    /// decoding commitment proof bytes failed: `{0}`
    CommitmentProofDecodingFailed(prost::DecodeError),
}

#[cfg(feature = "std")]
impl std::error::Error for CommitmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::CommitmentProofDecodingFailed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Display)]
pub enum InterchainQueryError {
    /// invalid identifier: `{0}`
    InvalidIdentifier(IdentifierError),
    /// invalid query height `{height}`: requests must target the latest remote height (0) and responses a non-negative one
    InvalidHeight { height: i64 },
    /// connection identifier cannot be empty
    EmptyConnectionId,
    /// invalid connection identifier `{connection_id}`
    InvalidConnectionId { connection_id: String },
    /// chain identifier cannot be empty
    EmptyChainId,
    /// invalid chain identifier `{chain_id}`
    InvalidChainId { chain_id: String },
    /// invalid query type `{query_type}`
    InvalidQueryType { query_type: String },
    /// signer cannot be empty
    EmptySigner,
    /// no callback `{callback_id}` registered for module `{module}`
    UnknownCallback { module: String, callback_id: String },
    /// query `{query_id}` not found
    QueryNotFound { query_id: QueryId },
    /// no data point stored for query `{query_id}`
    DataPointNotFound { query_id: QueryId },
    /// unable to validate proof: no proof submitted for query `{query_id}`
    MissingProof { query_id: QueryId },
    /// unable to verify proof: `{0}`
    ProofInvalid(CommitmentError),
    /// no light client tracks the counterparty of connection `{connection_id}`
    ClientNotFound { connection_id: String },
    /// consensus state not found for connection `{connection_id}` at height `{height}`
    ConsensusStateNotFound {
        connection_id: String,
        height: String,
    },
    /// light client of connection `{connection_id}` is at height `{latest}`, behind proof height `{height}`
    ClientBehind {
        connection_id: String,
        height: String,
        latest: String,
    },
    /// decoding raw msg error: `{reason}`
    DecodeRawMsg { reason: String },
    /// unknown msg type: `{msg_type}`
    UnknownMsgType { msg_type: String },
    /// callback failed: `{0}`
    Callback(String),
    /// store error: `{reason}`
    Store { reason: String },
}

#[cfg(feature = "std")]
impl std::error::Error for InterchainQueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::InvalidIdentifier(e) => Some(e),
            Self::ProofInvalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IdentifierError> for InterchainQueryError {
    fn from(err: IdentifierError) -> Self {
        Self::InvalidIdentifier(err)
    }
}

impl From<CommitmentError> for InterchainQueryError {
    fn from(err: CommitmentError) -> Self {
        Self::ProofInvalid(err)
    }
}
