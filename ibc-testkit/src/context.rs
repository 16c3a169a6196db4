//! Implementation of a host context mock, used in testing the handlers of
//! every application.

use alloc::collections::{BTreeMap, BTreeSet};
use core::time::Duration;

use ibc_app_interchain_accounts::port::new_controller_port_id;
use ibc_app_interchain_accounts::types::{
    CallbackData, EpochTracker, IcaAccountType, PacketKey, Params,
};
use ibc_app_interchain_query::types::merkle::ProofSpecs;
use ibc_app_interchain_query::types::{DataPoint, Query, QueryId};
use ibc_app_stakeibc::types::{DepositRecord, HostZone};
use ibc_core_client_types::Height;
use ibc_core_host_types::identifiers::{ChainId, ChannelId, ConnectionId, PortId, Sequence};
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;
use tracing::debug;

use crate::fixtures::context::MockContextConfig;

/// A consensus state of a mock light client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockConsensusState {
    pub root: Vec<u8>,
    /// Unix nanoseconds.
    pub timestamp: u64,
}

/// Light client of the chain at the other end of a connection.
#[derive(Clone, Debug)]
pub struct MockLightClient {
    pub proof_specs: ProofSpecs,
    pub latest_height: Height,
    pub consensus_states: BTreeMap<Height, MockConsensusState>,
}

/// A packet handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentPacket {
    pub key: PacketKey,
    pub data: Vec<u8>,
    pub timeout_timestamp: u64,
}

/// An object that stores all the application records of the host.
#[derive(Clone, Debug, Default)]
pub struct MockStore {
    /// Pending interchain queries, indexed by fingerprint.
    pub queries: BTreeMap<QueryId, Query>,

    /// Cached query answers.
    pub data_points: BTreeMap<QueryId, DataPoint>,

    /// Light clients, indexed by the connection they back.
    pub light_clients: BTreeMap<ConnectionId, MockLightClient>,

    /// Counterparty chain of every open connection.
    pub connections: BTreeMap<ConnectionId, ChainId>,

    /// Counter for channel identifiers.
    pub channel_ids_counter: u64,

    pub active_channels: BTreeMap<(ConnectionId, PortId), ChannelId>,

    /// Channels the controller owns the capability of.
    pub channel_capabilities: BTreeSet<(PortId, ChannelId)>,

    /// Tracks the sequence number for the next packet to be sent.
    pub next_sequence_send: BTreeMap<(PortId, ChannelId), Sequence>,

    /// Packets sent, in order.
    pub sent_packets: Vec<SentPacket>,

    pub ica_params: Params,

    pub epoch_trackers: BTreeMap<String, EpochTracker>,

    pub callback_data: BTreeMap<PacketKey, CallbackData>,

    pub host_zones: BTreeMap<String, HostZone>,

    pub deposit_records: BTreeMap<u64, DepositRecord>,

    /// Counter for deposit record identifiers.
    pub deposit_record_counter: u64,

    /// Emitted module events in order
    pub events: Vec<ModuleEvent>,
}

/// A context implementing the dependencies necessary for testing every
/// application.
#[derive(Clone, Debug)]
pub struct MockContext {
    /// Host chain identifier.
    pub host_chain_id: ChainId,

    /// Current height of the host chain.
    pub host_height: u64,

    /// Timestamp of the current block, in unix nanoseconds.
    pub host_timestamp: u64,

    /// Average time duration between blocks
    pub block_time: Duration,

    pub store: MockStore,
}

impl Default for MockContext {
    fn default() -> Self {
        MockContextConfig::builder().build()
    }
}

impl MockContext {
    /// Moves to the next block.
    pub fn advance_block(&mut self) {
        self.host_height += 1;
        self.host_timestamp += u64::try_from(self.block_time.as_nanos()).unwrap_or(u64::MAX);
    }

    /// Moves forward to `height`, one block at a time.
    pub fn advance_block_up_to(mut self, height: u64) -> Self {
        while self.host_height < height {
            self.advance_block();
        }
        self
    }

    /// Runs `f` as one atomic step: every write is rolled back if it fails.
    pub fn transact<T, E>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E> {
        let snapshot = self.store.clone();
        let result = f(self);
        if result.is_err() {
            debug!(height = self.host_height, "rolling back failed transaction");
            self.store = snapshot;
        }
        result
    }

    /// Associates `connection_id` with the counterparty chain `chain_id`.
    pub fn with_connection(mut self, connection_id: ConnectionId, chain_id: ChainId) -> Self {
        self.store.connections.insert(connection_id, chain_id);
        self
    }

    /// Registers a light client for `connection_id`, at `latest_height`,
    /// without consensus states.
    pub fn with_light_client(
        mut self,
        connection_id: ConnectionId,
        proof_specs: ProofSpecs,
        latest_height: Height,
    ) -> Self {
        self.store.light_clients.insert(
            connection_id,
            MockLightClient {
                proof_specs,
                latest_height,
                consensus_states: BTreeMap::new(),
            },
        );
        self
    }

    /// Adds a consensus state to the light client of `connection_id`,
    /// moving its latest height forward if needed.
    pub fn with_consensus_state(
        mut self,
        connection_id: &ConnectionId,
        height: Height,
        consensus_state: MockConsensusState,
    ) -> Self {
        self.store_consensus_state(connection_id, height, consensus_state);
        self
    }

    /// Updates the light client of `connection_id` to `height`.
    pub fn store_consensus_state(
        &mut self,
        connection_id: &ConnectionId,
        height: Height,
        consensus_state: MockConsensusState,
    ) {
        let client = self
            .store
            .light_clients
            .get_mut(connection_id)
            .expect("light client exists");
        client.latest_height = client.latest_height.max(height);
        client.consensus_states.insert(height, consensus_state);
    }

    /// Opens a channel on `port_id` for `connection_id` and makes it the
    /// active one. The capability is granted when `with_capability` is set.
    pub fn with_active_channel(
        mut self,
        connection_id: ConnectionId,
        port_id: PortId,
        with_capability: bool,
    ) -> Self {
        let channel_id = ChannelId::new(self.store.channel_ids_counter);
        self.store.channel_ids_counter += 1;

        if with_capability {
            self.store
                .channel_capabilities
                .insert((port_id.clone(), channel_id.clone()));
        }
        self.store
            .active_channels
            .insert((connection_id, port_id), channel_id);
        self
    }

    /// Opens the channel of the interchain account of type `account_type`
    /// on the counterparty of `connection_id`, with its capability.
    pub fn with_interchain_account(
        self,
        connection_id: ConnectionId,
        account_type: IcaAccountType,
    ) -> Self {
        let port_id = self.controller_port_id(&connection_id, account_type);
        self.with_active_channel(connection_id, port_id, true)
    }

    pub fn with_epoch_tracker(mut self, tracker: EpochTracker) -> Self {
        self.store
            .epoch_trackers
            .insert(tracker.epoch_identifier.clone(), tracker);
        self
    }

    pub fn with_ica_params(mut self, params: Params) -> Self {
        self.store.ica_params = params;
        self
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.store.queries.insert(query.id.clone(), query);
        self
    }

    pub fn with_data_point(mut self, data_point: DataPoint) -> Self {
        self.store
            .data_points
            .insert(data_point.id.clone(), data_point);
        self
    }

    pub fn with_host_zone(mut self, zone: HostZone) -> Self {
        self.store
            .host_zones
            .insert(zone.chain_id.to_string(), zone);
        self
    }

    /// Stores `record` under its own identifier.
    pub fn with_deposit_record(mut self, record: DepositRecord) -> Self {
        self.store.deposit_record_counter = self.store.deposit_record_counter.max(record.id + 1);
        self.store.deposit_records.insert(record.id, record);
        self
    }

    /// Controller port of the account of type `account_type` on the
    /// counterparty of `connection_id`.
    pub fn controller_port_id(
        &self,
        connection_id: &ConnectionId,
        account_type: IcaAccountType,
    ) -> PortId {
        let chain_id = self
            .store
            .connections
            .get(connection_id)
            .expect("connection exists");
        new_controller_port_id(&account_type.owner(chain_id)).expect("valid owner")
    }

    /// Active channel of the account of type `account_type` on the
    /// counterparty of `connection_id`.
    pub fn active_channel_id(
        &self,
        connection_id: &ConnectionId,
        account_type: IcaAccountType,
    ) -> Option<ChannelId> {
        let port_id = self.controller_port_id(connection_id, account_type);
        self.store
            .active_channels
            .get(&(connection_id.clone(), port_id))
            .cloned()
    }

    pub fn get_events(&self) -> &[ModuleEvent] {
        &self.store.events
    }

    pub fn sent_packets(&self) -> &[SentPacket] {
        &self.store.sent_packets
    }

    pub fn last_sent_packet(&self) -> Option<&SentPacket> {
        self.store.sent_packets.last()
    }
}
