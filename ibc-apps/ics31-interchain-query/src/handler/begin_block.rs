use ibc_app_interchain_query_types::error::InterchainQueryError;
use ibc_app_interchain_query_types::events::QueryRequestEvent;
use ibc_app_interchain_query_types::QueryId;
use ibc_primitives::prelude::*;
use tracing::debug;

use crate::context::InterchainQueryExecutionContext;

/// Announces every due query to relayers with a `query_request` event and
/// records the current height as its last dispatch.
///
/// Returns the identifiers of the dispatched queries, in identifier order.
pub fn begin_block<Ctx>(ctx: &mut Ctx) -> Result<Vec<QueryId>, InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    let current_height = ctx.host_height()?;
    let mut dispatched = Vec::new();

    for mut query in ctx.queries()? {
        if !query.is_due(current_height) {
            continue;
        }

        debug!(
            query_id = %query.id,
            last_height = query.last_height,
            current_height,
            "dispatching query"
        );

        ctx.emit_module_event(
            QueryRequestEvent {
                query_id: query.id.clone(),
                connection_id: query.connection_id.clone(),
                chain_id: query.chain_id.clone(),
                query_type: query.query_type.clone(),
                request: query.request.clone(),
                height: query.height,
            }
            .into(),
        )?;

        query.last_height = current_height;
        dispatched.push(query.id.clone());
        ctx.store_query(query)?;
    }

    Ok(dispatched)
}
