//! Staking operations initiated on host zones.
mod delegate;
mod withdrawal;

pub use delegate::*;
pub use withdrawal::*;
