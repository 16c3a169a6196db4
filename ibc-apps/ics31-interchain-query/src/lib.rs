//! Implementation of the interchain query (ICQ) application logic.
//!
//! + A module asks a question with [`handler::make_request`]; the query is
//!   keyed by its fingerprint so the same question is never stored twice.
//! + Once per block, [`handler::begin_block`] announces due queries to
//!   relayers through `query_request` events.
//! + A relayer answers with a `MsgSubmitQueryResponse`, handled by
//!   [`handler::submit_query_response`]: the answer is verified against the
//!   light client's consensus root, handed to the registered callbacks and
//!   optionally cached as a data point.
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

pub mod callback;
pub mod context;
pub mod handler;
pub mod verify;

/// Re-exports the interchain query data structures from the
/// `ibc-app-interchain-query-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_app_interchain_query_types::*;
}
