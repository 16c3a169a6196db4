use ibc_app_interchain_accounts::context::{
    InterchainAccountExecutionContext, InterchainAccountValidationContext,
};
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::{CallbackData, EpochTracker, PacketKey, Params};
use ibc_core_host_types::identifiers::{ChainId, ChannelId, ConnectionId, PortId, Sequence};
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;

use crate::context::{MockContext, SentPacket};

impl InterchainAccountValidationContext for MockContext {
    fn get_params(&self) -> Result<Params, InterchainAccountError> {
        Ok(self.store.ica_params.clone())
    }

    fn connection_chain_id(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<ChainId, InterchainAccountError> {
        self.store
            .connections
            .get(connection_id)
            .cloned()
            .ok_or_else(|| InterchainAccountError::ConnectionNotFound {
                connection_id: connection_id.to_string(),
            })
    }

    fn get_active_channel_id(
        &self,
        connection_id: &ConnectionId,
        port_id: &PortId,
    ) -> Result<Option<ChannelId>, InterchainAccountError> {
        Ok(self
            .store
            .active_channels
            .get(&(connection_id.clone(), port_id.clone()))
            .cloned())
    }

    fn has_channel_capability(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<bool, InterchainAccountError> {
        Ok(self
            .store
            .channel_capabilities
            .contains(&(port_id.clone(), channel_id.clone())))
    }

    fn epoch_tracker(&self, epoch_id: &str) -> Result<Option<EpochTracker>, InterchainAccountError> {
        Ok(self.store.epoch_trackers.get(epoch_id).cloned())
    }

    fn callback_data(&self, key: &PacketKey) -> Result<Option<CallbackData>, InterchainAccountError> {
        Ok(self.store.callback_data.get(key).cloned())
    }

    fn callback_data_entries(&self) -> Result<Vec<CallbackData>, InterchainAccountError> {
        Ok(self.store.callback_data.values().cloned().collect())
    }
}

impl InterchainAccountExecutionContext for MockContext {
    fn send_packet(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        data: Vec<u8>,
        timeout_timestamp: u64,
    ) -> Result<Sequence, InterchainAccountError> {
        if timeout_timestamp <= self.host_timestamp {
            return Err(InterchainAccountError::SendPacket {
                reason: format!(
                    "timeout timestamp {timeout_timestamp} is not after the host timestamp {}",
                    self.host_timestamp
                ),
            });
        }

        let next_sequence = self
            .store
            .next_sequence_send
            .entry((port_id.clone(), channel_id.clone()))
            .or_insert_with(|| Sequence::from(1));
        let sequence = *next_sequence;
        *next_sequence = Sequence::from(sequence.value() + 1);

        self.store.sent_packets.push(SentPacket {
            key: PacketKey::new(port_id.clone(), channel_id.clone(), sequence),
            data,
            timeout_timestamp,
        });

        Ok(sequence)
    }

    fn store_callback_data(&mut self, data: CallbackData) -> Result<(), InterchainAccountError> {
        self.store.callback_data.insert(data.key.clone(), data);
        Ok(())
    }

    fn delete_callback_data(&mut self, key: &PacketKey) -> Result<(), InterchainAccountError> {
        self.store.callback_data.remove(key);
        Ok(())
    }

    fn emit_module_event(&mut self, event: ModuleEvent) -> Result<(), InterchainAccountError> {
        self.store.events.push(event);
        Ok(())
    }
}
