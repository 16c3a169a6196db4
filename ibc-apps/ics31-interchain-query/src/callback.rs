//! Callback signature of modules consuming query answers

use ibc_app_callbacks::{CallbackRegistry, ModuleCallbacks};
use ibc_app_interchain_query_types::error::InterchainQueryError;
use ibc_app_interchain_query_types::Query;

/// Successful outcome of a query callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    Success,
    /// The callback has re-issued the query it was answering: a one-shot
    /// query must then be kept instead of removed.
    SuccessRetain,
}

/// A query callback receives the verified result and the query it answers.
pub type QueryCallbackFn<Ctx> =
    fn(&mut Ctx, &[u8], &Query) -> Result<CallbackOutcome, InterchainQueryError>;

pub type QueryCallbacks<Ctx> = ModuleCallbacks<QueryCallbackFn<Ctx>>;

pub type QueryCallbackRegistry<Ctx> = CallbackRegistry<QueryCallbackFn<Ctx>>;
