use ibc_app_interchain_query_types::error::InterchainQueryError;
use ibc_app_interchain_query_types::{DataPoint, QueryId};
use tracing::debug;

use super::make_request::{make_request, QueryRequest};
use crate::callback::QueryCallbackRegistry;
use crate::context::{InterchainQueryExecutionContext, InterchainQueryValidationContext};

/// Result of reading a data point with a staleness bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataPointOutcome {
    /// The cached value is recent enough.
    Fresh(DataPoint),
    /// Nothing was cached; the query has been submitted.
    Requested(QueryId),
    /// The cached value is too old; the query has been submitted again.
    StaleRequested(QueryId),
}

/// Looks up the data point cached for the query `request` describes. The
/// request's callback module names the module owning the data point.
pub fn get_datapoint<Ctx>(ctx: &Ctx, request: &QueryRequest) -> Result<DataPoint, InterchainQueryError>
where
    Ctx: InterchainQueryValidationContext,
{
    let query_id = request.query_id()?;

    ctx.data_point(&query_id)?
        .ok_or(InterchainQueryError::DataPointNotFound { query_id })
}

/// Returns the cached data point of `module` for the query `request`
/// describes, unless it is missing or older than `max_age` blocks, in which
/// case a one-shot query retaining its answer is submitted instead.
pub fn get_datapoint_or_request<Ctx>(
    ctx: &mut Ctx,
    registry: &QueryCallbackRegistry<Ctx>,
    module: &str,
    request: QueryRequest,
    max_age: u64,
) -> Result<DataPointOutcome, InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    let request = request
        .for_module(module)
        .with_period(-1)
        .with_ttl(max_age.max(1));

    let stale = match get_datapoint(ctx, &request) {
        Ok(data_point) => {
            let current_height = ctx.host_height()?;
            if !data_point.is_stale(current_height, max_age) {
                return Ok(DataPointOutcome::Fresh(data_point));
            }
            debug!(
                query_id = %data_point.id,
                local_height = data_point.local_height,
                current_height,
                max_age,
                "stale data point; query submitted"
            );
            true
        }
        Err(InterchainQueryError::DataPointNotFound { query_id }) => {
            debug!(query_id = %query_id, "no data point; query submitted");
            false
        }
        Err(e) => return Err(e),
    };

    let query_id = make_request(ctx, registry, request)?;

    Ok(if stale {
        DataPointOutcome::StaleRequested(query_id)
    } else {
        DataPointOutcome::Requested(query_id)
    })
}
