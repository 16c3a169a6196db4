//! Liquid staking on host zones through interchain accounts.
//!
//! Deposits are delegated from the zone's delegation account with
//! [`host::delegate_on_host`]; rewards accumulate in the withdrawal account,
//! whose balance is read with an interchain query
//! ([`host::update_withdrawal_balance`]) and sent back to the delegation
//! account for reinvestment. The [`callbacks`] settle each step once the host
//! chain has answered.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod callbacks;
pub mod context;
pub mod error;
pub mod host;
pub mod proto;
pub mod types;

/// Module identifier of the staking application.
pub const MODULE_ID_STR: &str = "stakeibc";
