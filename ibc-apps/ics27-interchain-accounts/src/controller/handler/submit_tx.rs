use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::events::SubmitTxEvent;
use ibc_app_interchain_accounts_types::packet::{CosmosTx, InterchainAccountPacketData};
use ibc_app_interchain_accounts_types::{
    CallbackData, IcaAccount, PacketKey, DAY_EPOCH, STRIDE_EPOCH,
};
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId, Sequence};
use ibc_primitives::prelude::*;
use ibc_primitives::proto::{Any, Protobuf};
use tracing::{debug, info};

use crate::context::{InterchainAccountExecutionContext, InterchainAccountValidationContext};
use crate::port::new_controller_port_id;

/// A transaction for an interchain account, with the callback to run once it
/// is acknowledged.
#[derive(Clone, Debug, PartialEq)]
pub struct IcaTx {
    pub connection_id: ConnectionId,
    pub account: IcaAccount,
    pub messages: Vec<Any>,
    pub callback_id: String,
    /// Callback data is only recorded when arguments are present.
    pub callback_args: Option<Vec<u8>>,
}

impl IcaTx {
    /// A transaction without callback.
    pub fn new(connection_id: ConnectionId, account: IcaAccount, messages: Vec<Any>) -> Self {
        Self {
            connection_id,
            account,
            messages,
            callback_id: String::new(),
            callback_args: None,
        }
    }

    pub fn with_callback(mut self, callback_id: impl Into<String>, callback_args: Vec<u8>) -> Self {
        self.callback_id = callback_id.into();
        self.callback_args = Some(callback_args);
        self
    }

    fn records_callback(&self) -> bool {
        !self.callback_id.is_empty() && self.callback_args.is_some()
    }
}

/// Sends `tx` to its interchain account with an absolute timeout, in unix
/// nanoseconds. Equivalent to calling [`submit_txs_validate`], followed by
/// [`submit_txs_execute`].
pub fn submit_txs<Ctx>(
    ctx: &mut Ctx,
    tx: IcaTx,
    timeout_timestamp: u64,
) -> Result<Sequence, InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    let (port_id, channel_id) = submit_txs_validate(ctx, &tx)?;
    submit_txs_execute(ctx, tx, port_id, channel_id, timeout_timestamp)
}

/// Resolves the controller port and active channel of the transaction's
/// account and checks that the controller may send on it.
pub fn submit_txs_validate<Ctx>(
    ctx: &Ctx,
    tx: &IcaTx,
) -> Result<(PortId, ChannelId), InterchainAccountError>
where
    Ctx: InterchainAccountValidationContext,
{
    if !ctx.get_params()?.controller_enabled {
        return Err(InterchainAccountError::ControllerDisabled);
    }

    if tx.messages.is_empty() {
        return Err(InterchainAccountError::EmptyMessages);
    }

    let chain_id = ctx.connection_chain_id(&tx.connection_id)?;
    let owner = tx.account.target.owner(&chain_id);
    let port_id = new_controller_port_id(&owner)?;

    let channel_id = ctx
        .get_active_channel_id(&tx.connection_id, &port_id)?
        .ok_or_else(|| InterchainAccountError::ChannelNotFound {
            connection_id: tx.connection_id.to_string(),
            port_id: port_id.to_string(),
        })?;

    if !ctx.has_channel_capability(&port_id, &channel_id)? {
        return Err(InterchainAccountError::CapabilityMissing {
            port_id: port_id.to_string(),
            channel_id: channel_id.to_string(),
        });
    }

    Ok((port_id, channel_id))
}

/// Sends the packet and, when the transaction names a callback with
/// arguments, records the callback data under the packet's coordinates.
pub fn submit_txs_execute<Ctx>(
    ctx: &mut Ctx,
    tx: IcaTx,
    port_id: PortId,
    channel_id: ChannelId,
    timeout_timestamp: u64,
) -> Result<Sequence, InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    let records_callback = tx.records_callback();
    let IcaTx {
        connection_id,
        account,
        messages,
        callback_id,
        callback_args,
    } = tx;
    let message_count = messages.len();

    let packet = InterchainAccountPacketData::execute_tx(CosmosTx::new(messages)?);
    let sequence = ctx.send_packet(&port_id, &channel_id, packet.encode_vec(), timeout_timestamp)?;
    let packet_key = PacketKey::new(port_id, channel_id, sequence);

    info!(
        %connection_id,
        account = %account.target,
        %packet_key,
        messages = message_count,
        timeout_timestamp,
        "transaction sent to interchain account"
    );

    match callback_args {
        Some(callback_args) if records_callback => {
            ctx.store_callback_data(CallbackData {
                key: packet_key.clone(),
                callback_id: callback_id.clone(),
                callback_args,
            })?;
            debug!(%packet_key, %callback_id, "callback data stored");
        }
        _ => debug!(%packet_key, "no callback data recorded"),
    }

    ctx.emit_module_event(
        SubmitTxEvent {
            connection_id,
            packet_key,
            messages: message_count,
            timeout_timestamp,
            callback_id,
        }
        .into(),
    )?;

    Ok(sequence)
}

/// Sends `tx` with a timeout just before the next start of `epoch_id`,
/// leaving `duration / buffer_size` of slack.
pub fn submit_txs_epoch<Ctx>(
    ctx: &mut Ctx,
    tx: IcaTx,
    epoch_id: &str,
) -> Result<Sequence, InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    let timeout_timestamp = compute_epoch_timeout(ctx, epoch_id)?;
    submit_txs(ctx, tx, timeout_timestamp)
}

/// [`submit_txs_epoch`] for the stride epoch.
pub fn submit_txs_stride_epoch<Ctx>(
    ctx: &mut Ctx,
    tx: IcaTx,
) -> Result<Sequence, InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    submit_txs_epoch(ctx, tx, STRIDE_EPOCH)
}

/// [`submit_txs_epoch`] for the day epoch.
pub fn submit_txs_day_epoch<Ctx>(ctx: &mut Ctx, tx: IcaTx) -> Result<Sequence, InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    submit_txs_epoch(ctx, tx, DAY_EPOCH)
}

/// Timeout of a packet that must land before `epoch_id` starts again.
pub fn compute_epoch_timeout<Ctx>(ctx: &Ctx, epoch_id: &str) -> Result<u64, InterchainAccountError>
where
    Ctx: InterchainAccountValidationContext,
{
    let tracker =
        ctx.epoch_tracker(epoch_id)?
            .ok_or_else(|| InterchainAccountError::EpochNotFound {
                epoch_id: epoch_id.to_string(),
            })?;
    let buffer_size = ctx.get_params()?.buffer_size;

    tracker.timeout_with_buffer(buffer_size)
}
