use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;

use super::Coin;
use crate::error::StakeIbcError;
use crate::proto::v1::{
    DelegateCallback as RawDelegateCallback, ReinvestCallback as RawReinvestCallback,
    SplitDelegation as RawSplitDelegation,
};

/// Part of a deposit delegated to one validator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitDelegation {
    pub validator: String,
    pub amount: u64,
}

/// Arguments of the delegate callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelegateCallback {
    pub host_zone_id: String,
    pub deposit_record_id: u64,
    pub split_delegations: Vec<SplitDelegation>,
}

impl Protobuf<RawDelegateCallback> for DelegateCallback {}

impl TryFrom<RawDelegateCallback> for DelegateCallback {
    type Error = StakeIbcError;

    fn try_from(raw: RawDelegateCallback) -> Result<Self, Self::Error> {
        if raw.host_zone_id.is_empty() {
            return Err(StakeIbcError::UnmarshalFailure {
                reason: "delegate callback without host zone".to_string(),
            });
        }

        Ok(Self {
            host_zone_id: raw.host_zone_id,
            deposit_record_id: raw.deposit_record_id,
            split_delegations: raw
                .split_delegations
                .into_iter()
                .map(|split| SplitDelegation {
                    validator: split.validator,
                    amount: split.amount,
                })
                .collect(),
        })
    }
}

impl From<DelegateCallback> for RawDelegateCallback {
    fn from(callback: DelegateCallback) -> Self {
        Self {
            host_zone_id: callback.host_zone_id,
            split_delegations: callback
                .split_delegations
                .into_iter()
                .map(|split| RawSplitDelegation {
                    validator: split.validator,
                    amount: split.amount,
                })
                .collect(),
            deposit_record_id: callback.deposit_record_id,
        }
    }
}

/// Arguments of the reinvest callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReinvestCallback {
    pub reinvest_amount: Coin,
    pub host_zone_id: String,
}

impl Protobuf<RawReinvestCallback> for ReinvestCallback {}

impl TryFrom<RawReinvestCallback> for ReinvestCallback {
    type Error = StakeIbcError;

    fn try_from(raw: RawReinvestCallback) -> Result<Self, Self::Error> {
        let reinvest_amount = raw
            .reinvest_amount
            .ok_or_else(|| StakeIbcError::UnmarshalFailure {
                reason: "reinvest callback without amount".to_string(),
            })?
            .try_into()?;

        Ok(Self {
            reinvest_amount,
            host_zone_id: raw.host_zone_id,
        })
    }
}

impl From<ReinvestCallback> for RawReinvestCallback {
    fn from(callback: ReinvestCallback) -> Self {
        Self {
            reinvest_amount: Some(callback.reinvest_amount.into()),
            host_zone_id: callback.host_zone_id,
        }
    }
}
