//! Defines the message relayers submit to answer an interchain query.
use ibc_core_host_types::identifiers::ChainId;
use ibc_primitives::prelude::*;
use ibc_primitives::proto::{Any, Protobuf};
use ibc_primitives::Signer;
use tendermint_proto::v0_38::crypto::ProofOps;

use crate::error::InterchainQueryError;
use crate::proto::v1::MsgSubmitQueryResponse as RawMsgSubmitQueryResponse;
use crate::QueryId;

pub const SUBMIT_QUERY_RESPONSE_TYPE_URL: &str = "/stride.interchainquery.v1.MsgSubmitQueryResponse";

/// Answer to a pending query, read on the remote chain at `height` and proven
/// by `proof_ops` against the consensus root at `height + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct MsgSubmitQueryResponse {
    pub chain_id: ChainId,
    pub query_id: QueryId,
    pub result: Vec<u8>,
    pub proof_ops: Option<ProofOps>,
    pub height: i64,
    pub signer: Signer,
}

impl Protobuf<RawMsgSubmitQueryResponse> for MsgSubmitQueryResponse {}

impl TryFrom<RawMsgSubmitQueryResponse> for MsgSubmitQueryResponse {
    type Error = InterchainQueryError;

    fn try_from(raw: RawMsgSubmitQueryResponse) -> Result<Self, Self::Error> {
        if raw.from_address.is_empty() {
            return Err(InterchainQueryError::EmptySigner);
        }

        Ok(Self {
            chain_id: ChainId::new(&raw.chain_id)?,
            query_id: raw.query_id.into(),
            result: raw.result,
            proof_ops: raw.proof_ops,
            height: raw.height,
            signer: raw.from_address.into(),
        })
    }
}

impl From<MsgSubmitQueryResponse> for RawMsgSubmitQueryResponse {
    fn from(msg: MsgSubmitQueryResponse) -> Self {
        Self {
            chain_id: msg.chain_id.to_string(),
            query_id: msg.query_id.into(),
            result: msg.result,
            proof_ops: msg.proof_ops,
            height: msg.height,
            from_address: msg.signer.to_string(),
        }
    }
}

impl TryFrom<Any> for MsgSubmitQueryResponse {
    type Error = InterchainQueryError;

    fn try_from(raw: Any) -> Result<Self, Self::Error> {
        match raw.type_url.as_str() {
            SUBMIT_QUERY_RESPONSE_TYPE_URL => {
                Self::decode_vec(&raw.value).map_err(|e| InterchainQueryError::DecodeRawMsg {
                    reason: e.to_string(),
                })
            }
            _ => Err(InterchainQueryError::UnknownMsgType {
                msg_type: raw.type_url,
            }),
        }
    }
}

impl From<MsgSubmitQueryResponse> for Any {
    fn from(msg: MsgSubmitQueryResponse) -> Self {
        Self {
            type_url: SUBMIT_QUERY_RESPONSE_TYPE_URL.to_string(),
            value: msg.encode_vec(),
        }
    }
}
