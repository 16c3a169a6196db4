//! Packet data sent from the controller to an interchain account host.
use ibc_primitives::prelude::*;
use ibc_primitives::proto::{Any, Protobuf};

use crate::error::InterchainAccountError;
use crate::proto::v1::{
    CosmosTx as RawCosmosTx, InterchainAccountPacketData as RawInterchainAccountPacketData,
};

pub const COSMOS_TX_TYPE_URL: &str = "/ibc.applications.interchain_accounts.v1.CosmosTx";

/// Maximum length of the memo a packet may carry.
pub const MAX_MEMO_CHAR_LENGTH: usize = 256;

/// Classification of the packets a controller sends to its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IcaPacketType {
    /// Execute a transaction on the interchain accounts host chain
    ExecuteTx = 1,
}

impl IcaPacketType {
    pub fn from_i32(value: i32) -> Result<Self, InterchainAccountError> {
        match value {
            1 => Ok(Self::ExecuteTx),
            packet_type => Err(InterchainAccountError::InvalidPacketType { packet_type }),
        }
    }
}

/// A transaction for the host to execute: the messages in order, all of
/// which must succeed.
#[derive(Clone, Debug, PartialEq)]
pub struct CosmosTx {
    pub messages: Vec<Any>,
}

impl CosmosTx {
    pub fn new(messages: Vec<Any>) -> Result<Self, InterchainAccountError> {
        if messages.is_empty() {
            return Err(InterchainAccountError::EmptyMessages);
        }
        Ok(Self { messages })
    }
}

impl Protobuf<RawCosmosTx> for CosmosTx {}

impl TryFrom<RawCosmosTx> for CosmosTx {
    type Error = InterchainAccountError;

    fn try_from(raw: RawCosmosTx) -> Result<Self, Self::Error> {
        Self::new(raw.messages)
    }
}

impl From<CosmosTx> for RawCosmosTx {
    fn from(value: CosmosTx) -> Self {
        RawCosmosTx {
            messages: value.messages,
        }
    }
}

impl From<CosmosTx> for Any {
    fn from(value: CosmosTx) -> Self {
        Any {
            type_url: COSMOS_TX_TYPE_URL.to_string(),
            value: value.encode_vec(),
        }
    }
}

/// Domain type of the interchain account packet data.
#[derive(Clone, Debug, PartialEq)]
pub struct InterchainAccountPacketData {
    pub packet_type: IcaPacketType,
    /// Encoded [`CosmosTx`].
    pub data: Vec<u8>,
    pub memo: String,
}

impl InterchainAccountPacketData {
    /// Packet asking the host to execute `tx`.
    pub fn execute_tx(tx: CosmosTx) -> Self {
        Self {
            packet_type: IcaPacketType::ExecuteTx,
            data: tx.encode_vec(),
            memo: String::new(),
        }
    }

    /// Decodes the transaction carried by the packet.
    pub fn cosmos_tx(&self) -> Result<CosmosTx, InterchainAccountError> {
        CosmosTx::decode_vec(&self.data).map_err(|e| InterchainAccountError::DecodeRawMsg {
            reason: e.to_string(),
        })
    }
}

impl Protobuf<RawInterchainAccountPacketData> for InterchainAccountPacketData {}

impl TryFrom<RawInterchainAccountPacketData> for InterchainAccountPacketData {
    type Error = InterchainAccountError;

    fn try_from(raw: RawInterchainAccountPacketData) -> Result<Self, Self::Error> {
        let packet_type = IcaPacketType::from_i32(raw.r#type)?;

        if raw.data.is_empty() {
            return Err(InterchainAccountError::EmptyPacketData);
        }

        if raw.memo.len() > MAX_MEMO_CHAR_LENGTH {
            return Err(InterchainAccountError::MemoTooLong {
                length: raw.memo.len(),
                max: MAX_MEMO_CHAR_LENGTH,
            });
        }

        Ok(Self {
            packet_type,
            data: raw.data,
            memo: raw.memo,
        })
    }
}

impl From<InterchainAccountPacketData> for RawInterchainAccountPacketData {
    fn from(domain: InterchainAccountPacketData) -> Self {
        RawInterchainAccountPacketData {
            r#type: domain.packet_type as i32,
            data: domain.data,
            memo: domain.memo,
        }
    }
}
