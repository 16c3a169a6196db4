//! Data structures and domain types of the interchain query (ICQ) application.
//!
//! A query asks a remote chain for the value stored under a key of one of its
//! stores. Queries are identified by a deterministic fingerprint, are answered
//! by relayers through [`msgs::MsgSubmitQueryResponse`], and their answers are
//! verified against a consensus root with ICS-23 proofs before being handed to
//! the module that asked.
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

mod datapoint;
mod identifier;
mod query;

pub use datapoint::*;
pub use identifier::*;
pub use query::*;
pub mod error;
pub mod events;
pub mod merkle;
pub mod msgs;
pub mod proto;

/// Module identifier for the interchain query application.
pub const MODULE_ID_STR: &str = "interchainquery";

/// Query type of a bank store lookup that is answered with a proof.
pub const BANK_STORE_QUERY_WITH_PROOF: &str = "store/bank/key";

/// Query type of a staking store lookup that is answered with a proof.
pub const STAKING_STORE_QUERY_WITH_PROOF: &str = "store/staking/key";
