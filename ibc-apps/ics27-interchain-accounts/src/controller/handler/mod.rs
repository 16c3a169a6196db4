//! Implements the transaction dispatch of the interchain accounts controller.
mod submit_tx;

pub use submit_tx::*;
