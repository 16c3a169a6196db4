use ibc_app_interchain_query::context::{
    ConsensusStateProvider, InterchainQueryExecutionContext, InterchainQueryValidationContext,
};
use ibc_app_interchain_query::types::error::InterchainQueryError;
use ibc_app_interchain_query::types::merkle::ProofSpecs;
use ibc_app_interchain_query::types::{DataPoint, Query, QueryId};
use ibc_core_client_types::Height;
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;

use crate::context::{MockConsensusState, MockContext, MockLightClient};

impl MockContext {
    fn light_client(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<&MockLightClient, InterchainQueryError> {
        self.store
            .light_clients
            .get(connection_id)
            .ok_or_else(|| InterchainQueryError::ClientNotFound {
                connection_id: connection_id.to_string(),
            })
    }

    fn consensus_state(
        &self,
        connection_id: &ConnectionId,
        height: &Height,
    ) -> Result<&MockConsensusState, InterchainQueryError> {
        self.light_client(connection_id)?
            .consensus_states
            .get(height)
            .ok_or_else(|| InterchainQueryError::ConsensusStateNotFound {
                connection_id: connection_id.to_string(),
                height: height.to_string(),
            })
    }
}

impl ConsensusStateProvider for MockContext {
    fn consensus_root(
        &self,
        connection_id: &ConnectionId,
        height: &Height,
    ) -> Result<Vec<u8>, InterchainQueryError> {
        Ok(self.consensus_state(connection_id, height)?.root.clone())
    }

    fn proof_specs(&self, connection_id: &ConnectionId) -> Result<ProofSpecs, InterchainQueryError> {
        Ok(self.light_client(connection_id)?.proof_specs.clone())
    }

    fn consensus_timestamp(
        &self,
        connection_id: &ConnectionId,
        height: &Height,
    ) -> Result<u64, InterchainQueryError> {
        Ok(self.consensus_state(connection_id, height)?.timestamp)
    }

    fn latest_height(&self, connection_id: &ConnectionId) -> Result<Height, InterchainQueryError> {
        Ok(self.light_client(connection_id)?.latest_height)
    }
}

impl InterchainQueryValidationContext for MockContext {
    fn host_height(&self) -> Result<u64, InterchainQueryError> {
        Ok(self.host_height)
    }

    fn query(&self, query_id: &QueryId) -> Result<Option<Query>, InterchainQueryError> {
        Ok(self.store.queries.get(query_id).cloned())
    }

    fn queries(&self) -> Result<Vec<Query>, InterchainQueryError> {
        Ok(self.store.queries.values().cloned().collect())
    }

    fn data_point(&self, query_id: &QueryId) -> Result<Option<DataPoint>, InterchainQueryError> {
        Ok(self.store.data_points.get(query_id).cloned())
    }

    fn data_points(&self) -> Result<Vec<DataPoint>, InterchainQueryError> {
        Ok(self.store.data_points.values().cloned().collect())
    }
}

impl InterchainQueryExecutionContext for MockContext {
    fn store_query(&mut self, query: Query) -> Result<(), InterchainQueryError> {
        self.store.queries.insert(query.id.clone(), query);
        Ok(())
    }

    fn delete_query(&mut self, query_id: &QueryId) -> Result<(), InterchainQueryError> {
        self.store.queries.remove(query_id);
        Ok(())
    }

    fn store_data_point(&mut self, data_point: DataPoint) -> Result<(), InterchainQueryError> {
        self.store
            .data_points
            .insert(data_point.id.clone(), data_point);
        Ok(())
    }

    fn delete_data_point(&mut self, query_id: &QueryId) -> Result<(), InterchainQueryError> {
        self.store.data_points.remove(query_id);
        Ok(())
    }

    fn emit_module_event(&mut self, event: ModuleEvent) -> Result<(), InterchainQueryError> {
        self.store.events.push(event);
        Ok(())
    }
}
