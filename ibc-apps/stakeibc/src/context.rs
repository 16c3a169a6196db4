//! Defines the main context traits of the staking application

use ibc_app_interchain_accounts::context::{
    InterchainAccountExecutionContext, InterchainAccountValidationContext,
};
use ibc_app_interchain_query::context::{
    InterchainQueryExecutionContext, InterchainQueryValidationContext,
};
use ibc_primitives::prelude::*;

use crate::error::StakeIbcError;
use crate::types::{DepositRecord, HostZone};

/// Methods required in staking validation, to be implemented by the host
pub trait StakeIbcValidationContext:
    InterchainAccountValidationContext + InterchainQueryValidationContext
{
    fn host_zone(&self, chain_id: &str) -> Result<Option<HostZone>, StakeIbcError>;

    /// All host zones, ordered by chain identifier.
    fn host_zones(&self) -> Result<Vec<HostZone>, StakeIbcError>;

    fn deposit_record(&self, record_id: u64) -> Result<Option<DepositRecord>, StakeIbcError>;

    /// All deposit records, ordered by identifier.
    fn deposit_records(&self) -> Result<Vec<DepositRecord>, StakeIbcError>;
}

/// Methods required in staking execution, to be implemented by the host
pub trait StakeIbcExecutionContext:
    StakeIbcValidationContext + InterchainAccountExecutionContext + InterchainQueryExecutionContext
{
    fn store_host_zone(&mut self, host_zone: HostZone) -> Result<(), StakeIbcError>;

    /// Stores `record` under the next free identifier, which is returned.
    /// The record's own `id` is ignored.
    fn append_deposit_record(&mut self, record: DepositRecord) -> Result<u64, StakeIbcError>;

    fn remove_deposit_record(&mut self, record_id: u64) -> Result<(), StakeIbcError>;
}
