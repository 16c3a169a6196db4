use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};
use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;

use crate::error::InterchainAccountError;
use crate::proto::v1::CallbackData as RawCallbackData;

/// Transport coordinates of one in-flight packet.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PacketKey {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
}

impl PacketKey {
    pub fn new(port_id: PortId, channel_id: ChannelId, sequence: Sequence) -> Self {
        Self {
            port_id,
            channel_id,
            sequence,
        }
    }
}

impl Display for PacketKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}.{}.{}", self.port_id, self.channel_id, self.sequence)
    }
}

/// What to run once the acknowledgement of the packet at `key` arrives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackData {
    pub key: PacketKey,
    pub callback_id: String,
    pub callback_args: Vec<u8>,
}

impl Protobuf<RawCallbackData> for CallbackData {}

impl TryFrom<RawCallbackData> for CallbackData {
    type Error = InterchainAccountError;

    fn try_from(raw: RawCallbackData) -> Result<Self, Self::Error> {
        let key = PacketKey {
            port_id: raw.port_id.parse()?,
            channel_id: raw.channel_id.parse()?,
            sequence: raw.sequence.into(),
        };

        if raw.callback_key != key.to_string() {
            return Err(InterchainAccountError::InvalidCallbackData {
                reason: format!(
                    "callback key `{}` does not match packet `{key}`",
                    raw.callback_key
                ),
            });
        }

        if raw.callback_id.is_empty() {
            return Err(InterchainAccountError::InvalidCallbackData {
                reason: "callback id cannot be empty".to_string(),
            });
        }

        Ok(Self {
            key,
            callback_id: raw.callback_id,
            callback_args: raw.callback_args,
        })
    }
}

impl From<CallbackData> for RawCallbackData {
    fn from(value: CallbackData) -> Self {
        Self {
            callback_key: value.key.to_string(),
            port_id: value.key.port_id.to_string(),
            channel_id: value.key.channel_id.to_string(),
            sequence: value.key.sequence.value(),
            callback_id: value.callback_id,
            callback_args: value.callback_args,
        }
    }
}
