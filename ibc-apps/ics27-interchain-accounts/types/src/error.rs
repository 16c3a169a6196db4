//! Defines the interchain accounts controller error type
use displaydoc::Display;
use ibc_core_host_types::error::IdentifierError;
use ibc_primitives::prelude::*;

#[derive(Debug, Display)]
pub enum InterchainAccountError {
    /// invalid identifier: `{0}`
    InvalidIdentifier(IdentifierError),
    /// invalid controller port `{port_id}`: `{reason}`
    InvalidPort {
        port_id: String,
        reason: IdentifierError,
    },
    /// connection `{connection_id}` not found
    ConnectionNotFound { connection_id: String },
    /// no active channel for connection `{connection_id}` on port `{port_id}`
    ChannelNotFound {
        connection_id: String,
        port_id: String,
    },
    /// module does not own the capability of channel `{channel_id}` on port `{port_id}`
    CapabilityMissing { port_id: String, channel_id: String },
    /// the interchain accounts controller is disabled
    ControllerDisabled,
    /// a transaction needs at least one message
    EmptyMessages,
    /// packet data cannot be empty
    EmptyPacketData,
    /// packet data type `{packet_type}` is not supported, only `EXECUTE_TX` is
    InvalidPacketType { packet_type: i32 },
    /// packet memo of `{length}` characters exceeds the maximum of `{max}`
    MemoTooLong { length: usize, max: usize },
    /// epoch tracker `{epoch_id}` not found
    EpochNotFound { epoch_id: String },
    /// invalid buffer: `{reason}`
    InvalidBuffer { reason: String },
    /// invalid params: `{reason}`
    InvalidParams { reason: String },
    /// failed to deserialize acknowledgement: `{reason}`
    AckDeserialization { reason: String },
    /// invalid callback data: `{reason}`
    InvalidCallbackData { reason: String },
    /// decoding raw msg error: `{reason}`
    DecodeRawMsg { reason: String },
    /// failed to send packet: `{reason}`
    SendPacket { reason: String },
    /// callback failed: `{0}`
    Callback(String),
    /// store error: `{reason}`
    Store { reason: String },
}

#[cfg(feature = "std")]
impl std::error::Error for InterchainAccountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::InvalidIdentifier(e) => Some(e),
            Self::InvalidPort { reason: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<IdentifierError> for InterchainAccountError {
    fn from(err: IdentifierError) -> Self {
        Self::InvalidIdentifier(err)
    }
}
