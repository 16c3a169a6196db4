use ibc_app_interchain_query_types::error::InterchainQueryError;
use ibc_app_interchain_query_types::{Query, QueryId, QueryType};
use ibc_core_host_types::identifiers::{ChainId, ConnectionId};
use ibc_primitives::prelude::*;
use tracing::info;

use crate::callback::QueryCallbackRegistry;
use crate::context::{InterchainQueryExecutionContext, InterchainQueryValidationContext};

const CONNECTION_ID_PREFIX: &str = "connection";

/// Arguments of a query submission.
///
/// A fresh request is a one-shot query (`period = -1`) at the latest remote
/// height, without callback and without data point retention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryRequest {
    pub connection_id: String,
    pub chain_id: String,
    pub query_type: String,
    pub request: Vec<u8>,
    pub period: i64,
    pub callback_module: String,
    pub callback_id: String,
    pub ttl: u64,
    pub height: i64,
}

impl QueryRequest {
    pub fn new(
        connection_id: impl Into<String>,
        chain_id: impl Into<String>,
        query_type: impl Into<String>,
        request: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            connection_id: connection_id.into(),
            chain_id: chain_id.into(),
            query_type: query_type.into(),
            request: request.into(),
            period: -1,
            callback_module: String::new(),
            callback_id: String::new(),
            ttl: 0,
            height: 0,
        }
    }

    pub fn with_period(mut self, period: i64) -> Self {
        self.period = period;
        self
    }

    /// Routes the answer to `callback_id` of `module`.
    pub fn with_callback(mut self, module: impl Into<String>, callback_id: impl Into<String>) -> Self {
        self.callback_module = module.into();
        self.callback_id = callback_id.into();
        self
    }

    /// Attributes the query to `module` without a callback; used by modules
    /// that only read cached data points.
    ///
    /// The module must still be registered. Its answers are only cached.
    pub fn for_module(self, module: impl Into<String>) -> Self {
        self.with_callback(module, "")
    }

    pub fn with_ttl(mut self, ttl: u64) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn at_height(mut self, height: i64) -> Self {
        self.height = height;
        self
    }

    /// Checks the identifying attributes and returns them in typed form.
    pub fn parse(&self) -> Result<(ConnectionId, ChainId, QueryType), InterchainQueryError> {
        if self.height != 0 {
            return Err(InterchainQueryError::InvalidHeight {
                height: self.height,
            });
        }

        if self.connection_id.is_empty() {
            return Err(InterchainQueryError::EmptyConnectionId);
        }
        let invalid_connection = || InterchainQueryError::InvalidConnectionId {
            connection_id: self.connection_id.clone(),
        };
        if !self.connection_id.starts_with(CONNECTION_ID_PREFIX) {
            return Err(invalid_connection());
        }
        let connection_id: ConnectionId = self
            .connection_id
            .parse()
            .map_err(|_| invalid_connection())?;

        if self.chain_id.is_empty() {
            return Err(InterchainQueryError::EmptyChainId);
        }
        let chain_id =
            ChainId::new(&self.chain_id).map_err(|_| InterchainQueryError::InvalidChainId {
                chain_id: self.chain_id.clone(),
            })?;

        let query_type = QueryType::new(self.query_type.clone())?;

        Ok((connection_id, chain_id, query_type))
    }

    /// The identifier the request is stored under.
    pub fn query_id(&self) -> Result<QueryId, InterchainQueryError> {
        let (connection_id, chain_id, query_type) = self.parse()?;

        Ok(QueryId::fingerprint(
            &connection_id,
            &chain_id,
            &query_type,
            &self.request,
            &self.callback_module,
            self.height,
        ))
    }
}

/// Submits a query. Equivalent to calling [`make_request_validate`], followed by [`make_request_execute`].
pub fn make_request<Ctx>(
    ctx: &mut Ctx,
    registry: &QueryCallbackRegistry<Ctx>,
    request: QueryRequest,
) -> Result<QueryId, InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    make_request_validate(ctx, registry, &request)?;
    make_request_execute(ctx, request)
}

/// Validates a query submission. If this succeeds, then it is legal to store
/// the query with [`make_request_execute`].
///
/// An empty `callback_module` needs no registration. A module with an empty
/// `callback_id` must be registered in `registry`; a module with a callback
/// id must have registered that callback.
pub fn make_request_validate<Ctx>(
    _ctx: &Ctx,
    registry: &QueryCallbackRegistry<Ctx>,
    request: &QueryRequest,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryValidationContext,
{
    request.parse()?;

    let module = request.callback_module.as_str();
    if module.is_empty() {
        return Ok(());
    }

    let callback_id = request.callback_id.as_str();
    let known = if callback_id.is_empty() {
        registry.is_registered(module)
    } else {
        registry.has_callback(module, callback_id)
    };

    if !known {
        return Err(InterchainQueryError::UnknownCallback {
            module: module.to_string(),
            callback_id: callback_id.to_string(),
        });
    }

    Ok(())
}

/// Stores the query, or re-arms it if the very same query is already pending
/// so that it is dispatched again in the next block.
pub fn make_request_execute<Ctx>(
    ctx: &mut Ctx,
    request: QueryRequest,
) -> Result<QueryId, InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    let (connection_id, chain_id, query_type) = request.parse()?;

    let query_id = QueryId::fingerprint(
        &connection_id,
        &chain_id,
        &query_type,
        &request.request,
        &request.callback_module,
        request.height,
    );

    match ctx.query(&query_id)? {
        Some(mut existing) => {
            info!(
                query_id = %query_id,
                previous_height = existing.last_height,
                "re-arming pending query"
            );
            existing.last_height = 0;
            ctx.store_query(existing)?;
        }
        None => {
            info!(
                query_id = %query_id,
                connection_id = %connection_id,
                chain_id = %chain_id,
                query_type = %query_type,
                period = request.period,
                module = %request.callback_module,
                callback_id = %request.callback_id,
                ttl = request.ttl,
                "storing new query"
            );
            ctx.store_query(Query {
                id: query_id.clone(),
                connection_id,
                chain_id,
                query_type,
                request: request.request,
                period: request.period,
                callback_module: request.callback_module,
                callback_id: request.callback_id,
                ttl: request.ttl,
                last_height: 0,
                height: request.height,
            })?;
        }
    }

    Ok(query_id)
}
