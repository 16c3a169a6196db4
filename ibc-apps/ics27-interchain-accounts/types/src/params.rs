use ibc_primitives::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::InterchainAccountError;

/// Default number of slices an epoch is cut into to size the timeout buffer.
pub const DEFAULT_BUFFER_SIZE: u64 = 5;

/// Parameters of the interchain accounts controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Whether the controller may send transactions.
    pub controller_enabled: bool,
    /// Packets sent for an epoch time out `duration / buffer_size` before the
    /// next epoch starts.
    pub buffer_size: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            controller_enabled: true,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<(), InterchainAccountError> {
        if self.buffer_size == 0 {
            return Err(InterchainAccountError::InvalidParams {
                reason: "buffer size must be positive".to_string(),
            });
        }
        Ok(())
    }
}
