use ibc_app_interchain_accounts::types::{IcaAccount, IcaAccountType};
use ibc_core_host_types::identifiers::{ChainId, ConnectionId};
use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;

use crate::error::StakeIbcError;
use crate::proto::v1::{
    HostZone as RawHostZone, IcaAccount as RawIcaAccount, Validator as RawValidator,
};

/// A validator of a host zone the delegation account stakes with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validator {
    pub address: String,
    pub delegation_amt: u64,
    /// Share of new delegations, relative to the other validators' weights.
    pub weight: u64,
}

impl From<RawValidator> for Validator {
    fn from(raw: RawValidator) -> Self {
        Self {
            address: raw.address,
            delegation_amt: raw.delegation_amt,
            weight: raw.weight,
        }
    }
}

impl From<Validator> for RawValidator {
    fn from(validator: Validator) -> Self {
        Self {
            address: validator.address,
            delegation_amt: validator.delegation_amt,
            weight: validator.weight,
        }
    }
}

/// A remote chain on which deposits are staked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostZone {
    pub chain_id: ChainId,
    pub connection_id: ConnectionId,
    pub host_denom: String,
    pub bech32_prefix: String,
    pub staked_bal: u64,
    pub validators: Vec<Validator>,
    pub delegation_account: Option<IcaAccount>,
    pub withdrawal_account: Option<IcaAccount>,
}

impl HostZone {
    pub fn validator(&self, address: &str) -> Option<&Validator> {
        self.validators.iter().find(|v| v.address == address)
    }

    pub fn validator_mut(&mut self, address: &str) -> Option<&mut Validator> {
        self.validators.iter_mut().find(|v| v.address == address)
    }

    pub fn total_validator_weight(&self) -> u64 {
        self.validators.iter().map(|v| v.weight).sum()
    }

    /// The zone's account of the given type, if registered with an address.
    pub fn ica_account(&self, account_type: IcaAccountType) -> Result<&IcaAccount, StakeIbcError> {
        let account = match account_type {
            IcaAccountType::Delegation => self.delegation_account.as_ref(),
            IcaAccountType::Withdrawal => self.withdrawal_account.as_ref(),
            IcaAccountType::Fee | IcaAccountType::Redemption => None,
        };

        account
            .filter(|account| !account.address.is_empty())
            .ok_or_else(|| StakeIbcError::MissingIcaAccount {
                chain_id: self.chain_id.to_string(),
                account_type,
            })
    }
}

fn ica_account_from_raw(raw: RawIcaAccount) -> Result<IcaAccount, StakeIbcError> {
    let target = match raw.target {
        0 => IcaAccountType::Delegation,
        1 => IcaAccountType::Fee,
        2 => IcaAccountType::Withdrawal,
        3 => IcaAccountType::Redemption,
        target => {
            return Err(StakeIbcError::UnmarshalFailure {
                reason: format!("unknown interchain account type `{target}`"),
            })
        }
    };
    Ok(IcaAccount::new(raw.address, target))
}

fn ica_account_to_raw(account: IcaAccount) -> RawIcaAccount {
    RawIcaAccount {
        address: account.address,
        target: account.target as i32,
    }
}

impl Protobuf<RawHostZone> for HostZone {}

impl TryFrom<RawHostZone> for HostZone {
    type Error = StakeIbcError;

    fn try_from(raw: RawHostZone) -> Result<Self, Self::Error> {
        Ok(Self {
            chain_id: ChainId::new(&raw.chain_id)?,
            connection_id: raw.connection_id.parse()?,
            host_denom: raw.host_denom,
            bech32_prefix: raw.bech32_prefix,
            staked_bal: raw.staked_bal,
            validators: raw.validators.into_iter().map(Into::into).collect(),
            delegation_account: raw
                .delegation_account
                .map(ica_account_from_raw)
                .transpose()?,
            withdrawal_account: raw
                .withdrawal_account
                .map(ica_account_from_raw)
                .transpose()?,
        })
    }
}

impl From<HostZone> for RawHostZone {
    fn from(zone: HostZone) -> Self {
        Self {
            chain_id: zone.chain_id.to_string(),
            connection_id: zone.connection_id.to_string(),
            host_denom: zone.host_denom,
            bech32_prefix: zone.bech32_prefix,
            staked_bal: zone.staked_bal,
            validators: zone.validators.into_iter().map(Into::into).collect(),
            delegation_account: zone.delegation_account.map(ica_account_to_raw),
            withdrawal_account: zone.withdrawal_account.map(ica_account_to_raw),
        }
    }
}
