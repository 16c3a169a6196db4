use ibc_app_interchain_query_types::error::InterchainQueryError;
use ibc_app_interchain_query_types::events::QueryResponseEvent;
use ibc_app_interchain_query_types::msgs::MsgSubmitQueryResponse;
use ibc_app_interchain_query_types::DataPoint;
use tracing::{debug, error, info};

use crate::callback::{CallbackOutcome, QueryCallbackRegistry};
use crate::context::{InterchainQueryExecutionContext, InterchainQueryValidationContext};
use crate::verify::verify_query_response;

/// Processes the answer to a pending query. Equivalent to calling
/// [`submit_query_response_validate`], followed by [`submit_query_response_execute`].
///
/// Answers to unknown queries, including queries that were already answered,
/// are accepted without any effect so that one late relayer message does not
/// fail the transaction carrying it.
pub fn submit_query_response<Ctx>(
    ctx: &mut Ctx,
    registry: &QueryCallbackRegistry<Ctx>,
    msg: MsgSubmitQueryResponse,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    let remote_timestamp = match submit_query_response_validate(ctx, &msg)? {
        ResponseStatus::Unknown => return Ok(()),
        ResponseStatus::Verified { remote_timestamp } => remote_timestamp,
    };

    submit_query_response_execute(ctx, registry, msg, remote_timestamp)
}

/// Outcome of validating a query response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseStatus {
    /// No pending query has the response's identifier.
    Unknown,
    /// The answer has been verified; `remote_timestamp` is the time of the
    /// consensus state it was proven against, if the query carries a proof.
    Verified { remote_timestamp: Option<u64> },
}

/// Looks up the answered query and verifies the answer's proof.
pub fn submit_query_response_validate<Ctx>(
    ctx: &Ctx,
    msg: &MsgSubmitQueryResponse,
) -> Result<ResponseStatus, InterchainQueryError>
where
    Ctx: InterchainQueryValidationContext,
{
    let Some(query) = ctx.query(&msg.query_id)? else {
        info!(query_id = %msg.query_id, "ignoring response to unknown or already answered query");
        return Ok(ResponseStatus::Unknown);
    };

    if msg.height < 0 {
        return Err(InterchainQueryError::InvalidHeight { height: msg.height });
    }

    let remote_timestamp = verify_query_response(ctx, &query, msg)?;

    Ok(ResponseStatus::Verified { remote_timestamp })
}

/// Hands a verified answer to every module owning the query's callback, in
/// module name order, then applies the retention policy:
///
/// + a positive `ttl` caches the answer as a data point;
/// + a one-shot query is removed, unless a callback reported
///   [`CallbackOutcome::SuccessRetain`];
/// + a periodic query stays as the callbacks left it.
///
/// A failing callback aborts the whole response.
pub fn submit_query_response_execute<Ctx>(
    ctx: &mut Ctx,
    registry: &QueryCallbackRegistry<Ctx>,
    msg: MsgSubmitQueryResponse,
    remote_timestamp: Option<u64>,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    let query = ctx
        .query(&msg.query_id)?
        .ok_or_else(|| InterchainQueryError::QueryNotFound {
            query_id: msg.query_id.clone(),
        })?;

    let remote_height =
        u64::try_from(msg.height).map_err(|_| InterchainQueryError::InvalidHeight {
            height: msg.height,
        })?;

    let mut retain = false;

    debug!(query_id = %query.id, callback_id = %query.callback_id, "executing query callbacks");
    for (module, callback) in registry.handlers_for(&query.callback_id) {
        match callback(&mut *ctx, &msg.result, &query) {
            Ok(CallbackOutcome::Success) => {
                info!(query_id = %query.id, module, callback_id = %query.callback_id, "query callback executed");
            }
            Ok(CallbackOutcome::SuccessRetain) => {
                info!(query_id = %query.id, module, callback_id = %query.callback_id, "query callback executed, query retained");
                retain = true;
            }
            Err(e) => {
                error!(
                    query_id = %query.id,
                    module,
                    callback_id = %query.callback_id,
                    query_type = %query.query_type,
                    error = %e,
                    "query callback failed"
                );
                return Err(e);
            }
        }
    }

    if query.ttl > 0 {
        let local_height = ctx.host_height()?;
        ctx.store_data_point(DataPoint {
            id: query.id.clone(),
            remote_height,
            local_height,
            value: msg.result,
        })?;
    }

    let retained = !query.is_one_shot() || retain;
    if !retained {
        ctx.delete_query(&query.id)?;
    }

    ctx.emit_module_event(
        QueryResponseEvent {
            query_id: query.id,
            chain_id: query.chain_id,
            height: msg.height,
            retained,
            remote_timestamp,
        }
        .into(),
    )?;

    Ok(())
}
