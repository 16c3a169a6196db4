//! Controller side of the interchain accounts application.
pub mod callback;
pub mod handler;
