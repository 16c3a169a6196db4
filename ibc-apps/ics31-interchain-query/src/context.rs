//! Defines the main context traits of the interchain query application

use ibc_app_interchain_query_types::error::InterchainQueryError;
use ibc_app_interchain_query_types::merkle::ProofSpecs;
use ibc_app_interchain_query_types::{DataPoint, Query, QueryId};
use ibc_core_client_types::Height;
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;

/// Read access to the light client tracking the remote end of a connection.
///
/// Missing client or consensus states are reported as errors, never
/// defaulted.
pub trait ConsensusStateProvider {
    /// Commitment root of the consensus state at `height`.
    fn consensus_root(
        &self,
        connection_id: &ConnectionId,
        height: &Height,
    ) -> Result<Vec<u8>, InterchainQueryError>;

    /// Proof specs the client was configured with.
    fn proof_specs(&self, connection_id: &ConnectionId) -> Result<ProofSpecs, InterchainQueryError>;

    /// Timestamp, in nanoseconds since the epoch, of the consensus state at `height`.
    fn consensus_timestamp(
        &self,
        connection_id: &ConnectionId,
        height: &Height,
    ) -> Result<u64, InterchainQueryError>;

    /// Latest height the client has been updated to.
    fn latest_height(&self, connection_id: &ConnectionId) -> Result<Height, InterchainQueryError>;
}

/// Methods required in interchain query validation, to be implemented by the host
pub trait InterchainQueryValidationContext: ConsensusStateProvider {
    /// Current height of the host chain.
    fn host_height(&self) -> Result<u64, InterchainQueryError>;

    fn query(&self, query_id: &QueryId) -> Result<Option<Query>, InterchainQueryError>;

    /// All pending queries, ordered by identifier.
    fn queries(&self) -> Result<Vec<Query>, InterchainQueryError>;

    fn data_point(&self, query_id: &QueryId) -> Result<Option<DataPoint>, InterchainQueryError>;

    /// All cached data points, ordered by identifier.
    fn data_points(&self) -> Result<Vec<DataPoint>, InterchainQueryError>;
}

/// Methods required in interchain query execution, to be implemented by the host
pub trait InterchainQueryExecutionContext: InterchainQueryValidationContext {
    /// Stores the query under its identifier, replacing any previous version.
    fn store_query(&mut self, query: Query) -> Result<(), InterchainQueryError>;

    fn delete_query(&mut self, query_id: &QueryId) -> Result<(), InterchainQueryError>;

    /// Stores the data point under its identifier, replacing any previous version.
    fn store_data_point(&mut self, data_point: DataPoint) -> Result<(), InterchainQueryError>;

    fn delete_data_point(&mut self, query_id: &QueryId) -> Result<(), InterchainQueryError>;

    fn emit_module_event(&mut self, event: ModuleEvent) -> Result<(), InterchainQueryError>;
}
