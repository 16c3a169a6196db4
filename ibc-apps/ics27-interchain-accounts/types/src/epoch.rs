use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;

use crate::error::InterchainAccountError;
use crate::proto::v1::EpochTracker as RawEpochTracker;

/// Identifier of the epoch that paces staking operations.
pub const STRIDE_EPOCH: &str = "stride_epoch";

/// Identifier of the daily epoch.
pub const DAY_EPOCH: &str = "day";

/// Progress of one epoch. Times are unix nanoseconds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpochTracker {
    pub epoch_identifier: String,
    pub epoch_number: u64,
    pub next_epoch_start_time: u64,
    pub duration: u64,
}

impl EpochTracker {
    /// Timeout of a packet that must land before the next epoch starts,
    /// leaving `duration / buffer_size` nanoseconds of slack.
    pub fn timeout_with_buffer(&self, buffer_size: u64) -> Result<u64, InterchainAccountError> {
        let buffer = self
            .duration
            .checked_div(buffer_size)
            .ok_or_else(|| InterchainAccountError::InvalidBuffer {
                reason: "buffer size cannot be zero".to_string(),
            })?;

        if buffer > self.duration {
            return Err(InterchainAccountError::InvalidBuffer {
                reason: format!(
                    "buffer `{buffer}` exceeds the duration `{}` of epoch `{}`",
                    self.duration, self.epoch_identifier
                ),
            });
        }

        self.next_epoch_start_time
            .checked_sub(buffer)
            .ok_or_else(|| InterchainAccountError::InvalidBuffer {
                reason: format!(
                    "buffer `{buffer}` is larger than the start time `{}` of the next `{}` epoch",
                    self.next_epoch_start_time, self.epoch_identifier
                ),
            })
    }
}

impl Protobuf<RawEpochTracker> for EpochTracker {}

impl TryFrom<RawEpochTracker> for EpochTracker {
    type Error = InterchainAccountError;

    fn try_from(raw: RawEpochTracker) -> Result<Self, Self::Error> {
        if raw.epoch_identifier.is_empty() {
            return Err(InterchainAccountError::EpochNotFound {
                epoch_id: raw.epoch_identifier,
            });
        }
        Ok(Self {
            epoch_identifier: raw.epoch_identifier,
            epoch_number: raw.epoch_number,
            next_epoch_start_time: raw.next_epoch_start_time,
            duration: raw.duration,
        })
    }
}

impl From<EpochTracker> for RawEpochTracker {
    fn from(value: EpochTracker) -> Self {
        Self {
            epoch_identifier: value.epoch_identifier,
            epoch_number: value.epoch_number,
            next_epoch_start_time: value.next_epoch_start_time,
            duration: value.duration,
        }
    }
}
