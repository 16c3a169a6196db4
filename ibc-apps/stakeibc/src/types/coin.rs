use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_primitives::prelude::*;
use ibc_proto::cosmos::base::v1beta1::Coin as RawCoin;

use crate::error::StakeIbcError;

/// An amount of a single denomination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coin {
    pub denom: String,
    pub amount: u64,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u64) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl TryFrom<RawCoin> for Coin {
    type Error = StakeIbcError;

    fn try_from(raw: RawCoin) -> Result<Self, Self::Error> {
        let amount = raw
            .amount
            .parse()
            .map_err(|_| StakeIbcError::InvalidAmount { amount: raw.amount })?;

        Ok(Self {
            denom: raw.denom,
            amount,
        })
    }
}

impl From<Coin> for RawCoin {
    fn from(coin: Coin) -> Self {
        Self {
            denom: coin.denom,
            amount: coin.amount.to_string(),
        }
    }
}
