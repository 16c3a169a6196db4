//! Testing library of the interchain query and interchain accounts
//! applications.
//!
//! [`context::MockContext`] stands in for the host chain: it implements the
//! context traits of every application over in-memory maps, tracks mock light
//! clients, channels and sent packets, and can run a step atomically with
//! [`context::MockContext::transact`]. The [`fixtures`] build the records and
//! proofs tests need.
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

#[cfg(feature = "std")]
extern crate std;

pub mod context;
pub mod fixtures;
pub mod testapp;
