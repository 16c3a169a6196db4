//! Defines the main context traits of the interchain accounts controller

use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::{CallbackData, EpochTracker, PacketKey, Params};
use ibc_core_host_types::identifiers::{ChainId, ChannelId, ConnectionId, PortId, Sequence};
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;

/// Methods required in interchain accounts validation, to be implemented by the host
pub trait InterchainAccountValidationContext {
    fn get_params(&self) -> Result<Params, InterchainAccountError>;

    /// Chain identifier of the counterparty of `connection_id`; errors with
    /// `ConnectionNotFound` if the connection does not exist.
    fn connection_chain_id(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<ChainId, InterchainAccountError>;

    /// Returns the active `ChannelId` of the provided `ConnectionId` and
    /// controller `PortId`, if any
    fn get_active_channel_id(
        &self,
        connection_id: &ConnectionId,
        port_id: &PortId,
    ) -> Result<Option<ChannelId>, InterchainAccountError>;

    /// Whether the controller owns the capability to send on the channel.
    fn has_channel_capability(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<bool, InterchainAccountError>;

    fn epoch_tracker(&self, epoch_id: &str) -> Result<Option<EpochTracker>, InterchainAccountError>;

    fn callback_data(&self, key: &PacketKey) -> Result<Option<CallbackData>, InterchainAccountError>;

    /// All stored callback data, ordered by packet key.
    fn callback_data_entries(&self) -> Result<Vec<CallbackData>, InterchainAccountError>;
}

/// Methods required in interchain accounts execution, to be implemented by the host
pub trait InterchainAccountExecutionContext: InterchainAccountValidationContext {
    /// Sends `data` on the channel and returns the sequence it was sent with.
    fn send_packet(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        data: Vec<u8>,
        timeout_timestamp: u64,
    ) -> Result<Sequence, InterchainAccountError>;

    /// Stores the callback data under its packet key, replacing any previous version.
    fn store_callback_data(&mut self, data: CallbackData) -> Result<(), InterchainAccountError>;

    fn delete_callback_data(&mut self, key: &PacketKey) -> Result<(), InterchainAccountError>;

    fn emit_module_event(&mut self, event: ModuleEvent) -> Result<(), InterchainAccountError>;
}
