use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_core_host_types::identifiers::ChainId;
use ibc_primitives::prelude::*;

use crate::error::InterchainAccountError;

/// Role of an interchain account on its host chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IcaAccountType {
    Delegation = 0,
    Fee = 1,
    Withdrawal = 2,
    Redemption = 3,
}

impl IcaAccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delegation => "DELEGATION",
            Self::Fee => "FEE",
            Self::Withdrawal => "WITHDRAWAL",
            Self::Redemption => "REDEMPTION",
        }
    }

    /// Owner the controller registers the account under: `{chain_id}.{TYPE}`.
    pub fn owner(&self, chain_id: &ChainId) -> String {
        format!("{chain_id}.{}", self.as_str())
    }
}

impl Display for IcaAccountType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IcaAccountType {
    type Err = InterchainAccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DELEGATION" => Ok(Self::Delegation),
            "FEE" => Ok(Self::Fee),
            "WITHDRAWAL" => Ok(Self::Withdrawal),
            "REDEMPTION" => Ok(Self::Redemption),
            _ => Err(InterchainAccountError::DecodeRawMsg {
                reason: format!("unknown interchain account type `{s}`"),
            }),
        }
    }
}

/// An account the controller owns on a host chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IcaAccount {
    pub address: String,
    pub target: IcaAccountType,
}

impl IcaAccount {
    pub fn new(address: impl Into<String>, target: IcaAccountType) -> Self {
        Self {
            address: address.into(),
            target,
        }
    }
}
