//! Classification of the acknowledgements returned by interchain account
//! hosts.
//!
//! Hosts acknowledge packets with the ICS-04 JSON envelope: either
//! `{"result": "<base64>"}` carrying the encoded [`TxMsgData`] of the
//! executed transaction, or `{"error": "<reason>"}`.
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ibc_primitives::prelude::*;
use prost::Message;
use serde::{Deserialize, Serialize};

use crate::error::InterchainAccountError;
pub use crate::proto::v1::{MsgData, TxMsgData};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Envelope {
    Result(String),
    Error(String),
}

/// How a dispatched transaction ended.
#[derive(Clone, Debug, PartialEq)]
pub enum AckResponse {
    /// Every message executed; one response per message.
    Success(TxMsgData),
    /// The host rejected the transaction.
    Failure(String),
    /// The packet timed out before the host received it.
    Timeout,
}

impl AckResponse {
    /// Classifies the raw acknowledgement of a packet.
    ///
    /// A successful envelope whose transaction data holds no message
    /// responses counts as a failure. Bytes that are not a valid envelope
    /// are an error.
    pub fn from_acknowledgement(ack: &[u8]) -> Result<Self, InterchainAccountError> {
        let envelope: Envelope = serde_json::from_slice(ack).map_err(|e| {
            InterchainAccountError::AckDeserialization {
                reason: e.to_string(),
            }
        })?;

        let encoded = match envelope {
            Envelope::Error(reason) => return Ok(Self::Failure(reason)),
            Envelope::Result(encoded) => encoded,
        };

        let bytes =
            STANDARD
                .decode(encoded)
                .map_err(|e| InterchainAccountError::AckDeserialization {
                    reason: e.to_string(),
                })?;

        let tx_msg_data = TxMsgData::decode(bytes.as_slice()).map_err(|e| {
            InterchainAccountError::AckDeserialization {
                reason: e.to_string(),
            }
        })?;

        if tx_msg_data.data.is_empty() && tx_msg_data.msg_responses.is_empty() {
            return Ok(Self::Failure(
                "acknowledgement carries no message responses".to_string(),
            ));
        }

        Ok(Self::Success(tx_msg_data))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Acknowledgement a host writes after executing a transaction.
pub fn success_acknowledgement(tx_msg_data: &TxMsgData) -> Result<Vec<u8>, InterchainAccountError> {
    encode(&Envelope::Result(STANDARD.encode(tx_msg_data.encode_to_vec())))
}

/// Acknowledgement a host writes after rejecting a transaction.
pub fn error_acknowledgement(reason: impl Into<String>) -> Result<Vec<u8>, InterchainAccountError> {
    encode(&Envelope::Error(reason.into()))
}

fn encode(envelope: &Envelope) -> Result<Vec<u8>, InterchainAccountError> {
    serde_json::to_vec(envelope).map_err(|e| InterchainAccountError::AckDeserialization {
        reason: e.to_string(),
    })
}
