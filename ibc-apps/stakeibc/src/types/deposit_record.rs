use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;

use crate::error::StakeIbcError;
use crate::proto::v1::DepositRecord as RawDepositRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepositRecordStatus {
    /// Waiting to be transferred to the host zone.
    Transfer = 0,
    /// On the host zone, waiting to be delegated.
    Stake = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepositRecordSource {
    /// Deposited by users on the home chain.
    Stride = 0,
    /// Rewards swept from the withdrawal account.
    WithdrawalIca = 1,
}

/// Funds waiting to be staked on a host zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositRecord {
    pub id: u64,
    pub amount: u64,
    pub denom: String,
    pub host_zone_id: String,
    pub status: DepositRecordStatus,
    pub source: DepositRecordSource,
    pub deposit_epoch_number: u64,
}

impl Protobuf<RawDepositRecord> for DepositRecord {}

impl TryFrom<RawDepositRecord> for DepositRecord {
    type Error = StakeIbcError;

    fn try_from(raw: RawDepositRecord) -> Result<Self, Self::Error> {
        let status = match raw.status {
            0 => DepositRecordStatus::Transfer,
            1 => DepositRecordStatus::Stake,
            status => {
                return Err(StakeIbcError::UnmarshalFailure {
                    reason: format!("unknown deposit record status `{status}`"),
                })
            }
        };
        let source = match raw.source {
            0 => DepositRecordSource::Stride,
            1 => DepositRecordSource::WithdrawalIca,
            source => {
                return Err(StakeIbcError::UnmarshalFailure {
                    reason: format!("unknown deposit record source `{source}`"),
                })
            }
        };

        Ok(Self {
            id: raw.id,
            amount: raw.amount,
            denom: raw.denom,
            host_zone_id: raw.host_zone_id,
            status,
            source,
            deposit_epoch_number: raw.deposit_epoch_number,
        })
    }
}

impl From<DepositRecord> for RawDepositRecord {
    fn from(record: DepositRecord) -> Self {
        Self {
            id: record.id,
            amount: record.amount,
            denom: record.denom,
            host_zone_id: record.host_zone_id,
            status: record.status as i32,
            deposit_epoch_number: record.deposit_epoch_number,
            source: record.source as i32,
        }
    }
}
