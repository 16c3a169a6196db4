//! Data structures and domain types of the interchain accounts (ICA)
//! controller.
//!
//! Transactions are sent to accounts the home chain controls on remote chains
//! as [`packet::InterchainAccountPacketData`]. The acknowledgement of each
//! packet arrives blocks later; [`CallbackData`] stored under the packet's
//! [`PacketKey`] tells the controller what to run when it does.
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

mod account;
mod callback_data;
mod epoch;
mod params;

pub use account::*;
pub use callback_data::*;
pub use epoch::*;
pub use params::*;
pub mod acknowledgement;
pub mod error;
pub mod events;
pub mod packet;
pub mod proto;

/// Module identifier for the interchain accounts controller.
pub const MODULE_ID_STR: &str = "interchainaccounts";

/// Prefix of every controller port identifier.
pub const CONTROLLER_PORT_PREFIX: &str = "icacontroller-";
