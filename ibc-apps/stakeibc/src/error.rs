//! Defines the staking application error type
use displaydoc::Display;
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::IcaAccountType;
use ibc_app_interchain_query::types::error::InterchainQueryError;
use ibc_core_host_types::error::IdentifierError;
use ibc_primitives::prelude::*;

#[derive(Debug, Display)]
pub enum StakeIbcError {
    /// invalid identifier: `{0}`
    InvalidIdentifier(IdentifierError),
    /// host zone `{chain_id}` not found
    HostZoneNotFound { chain_id: String },
    /// validator `{validator}` not found on host zone `{chain_id}`
    ValidatorNotFound { validator: String, chain_id: String },
    /// epoch tracker `{epoch_id}` not found
    EpochNotFound { epoch_id: String },
    /// deposit record `{record_id}` not found
    RecordNotFound { record_id: u64 },
    /// no non-zero validator weights on host zone `{chain_id}`
    NoValidatorWeights { chain_id: String },
    /// invalid amount `{amount}`
    InvalidAmount { amount: String },
    /// host zone `{chain_id}` has no {account_type} account
    MissingIcaAccount {
        chain_id: String,
        account_type: IcaAccountType,
    },
    /// invalid address `{address}`: `{reason}`
    InvalidAddress { address: String, reason: String },
    /// unable to unmarshal data structure: `{reason}`
    UnmarshalFailure { reason: String },
    /// interchain accounts error: `{0}`
    InterchainAccount(InterchainAccountError),
    /// interchain query error: `{0}`
    InterchainQuery(InterchainQueryError),
    /// store error: `{reason}`
    Store { reason: String },
}

#[cfg(feature = "std")]
impl std::error::Error for StakeIbcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::InvalidIdentifier(e) => Some(e),
            Self::InterchainAccount(e) => Some(e),
            Self::InterchainQuery(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IdentifierError> for StakeIbcError {
    fn from(err: IdentifierError) -> Self {
        Self::InvalidIdentifier(err)
    }
}

impl From<InterchainAccountError> for StakeIbcError {
    fn from(err: InterchainAccountError) -> Self {
        Self::InterchainAccount(err)
    }
}

impl From<InterchainQueryError> for StakeIbcError {
    fn from(err: InterchainQueryError) -> Self {
        Self::InterchainQuery(err)
    }
}

impl From<StakeIbcError> for InterchainAccountError {
    fn from(err: StakeIbcError) -> Self {
        match err {
            StakeIbcError::InterchainAccount(e) => e,
            e => Self::Callback(e.to_string()),
        }
    }
}

impl From<StakeIbcError> for InterchainQueryError {
    fn from(err: StakeIbcError) -> Self {
        match err {
            StakeIbcError::InterchainQuery(e) => e,
            e => Self::Callback(e.to_string()),
        }
    }
}
