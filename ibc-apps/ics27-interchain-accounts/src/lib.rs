//! Implementation of the controller side of Interchain Accounts (ICS27).
//!
//! + [`controller::handler::submit_txs`] sends a transaction to an account the
//!   chain controls on a host chain, and records which callback must run once
//!   the packet is acknowledged.
//! + [`controller::callback::on_acknowledgement_packet_execute`] and
//!   [`controller::callback::on_timeout_packet_execute`] match the late
//!   outcome with that record and run the callback.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod context;
pub mod controller;
pub mod port;

/// Re-exports the interchain accounts data structures from the
/// `ibc-app-interchain-accounts-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_app_interchain_accounts_types::*;
}
