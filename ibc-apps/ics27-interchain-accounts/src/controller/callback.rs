//! Correlates acknowledgements and timeouts of sent transactions with the
//! callbacks registered for them.
use ibc_app_callbacks::{CallbackRegistry, ModuleCallbacks};
use ibc_app_interchain_accounts_types::acknowledgement::{AckResponse, TxMsgData};
use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::events::{AckOutcome, AcknowledgementEvent};
use ibc_app_interchain_accounts_types::{CallbackData, PacketKey};
use tracing::{debug, error, info, warn};

use crate::context::InterchainAccountExecutionContext;

/// A transaction callback receives the key of the acknowledged packet, the
/// responses of the executed messages and the arguments recorded at
/// dispatch.
pub type IcaCallbackFn<Ctx> =
    fn(&mut Ctx, &PacketKey, &TxMsgData, &[u8]) -> Result<(), InterchainAccountError>;

pub type IcaCallbacks<Ctx> = ModuleCallbacks<IcaCallbackFn<Ctx>>;

pub type IcaCallbackRegistry<Ctx> = CallbackRegistry<IcaCallbackFn<Ctx>>;

/// Handles the acknowledgement of the packet at `packet_key`.
///
/// Packets sent without callback data are acknowledged without effect. A
/// malformed acknowledgement and a failing callback are errors.
pub fn on_acknowledgement_packet_execute<Ctx>(
    ctx: &mut Ctx,
    registry: &IcaCallbackRegistry<Ctx>,
    packet_key: &PacketKey,
    acknowledgement: &[u8],
) -> Result<(), InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    let Some(callback_data) = ctx.callback_data(packet_key)? else {
        debug!(%packet_key, "no callback data for acknowledged packet");
        return Ok(());
    };

    let response = AckResponse::from_acknowledgement(acknowledgement)?;

    handle_response(ctx, registry, callback_data, response)
}

/// Handles the timeout of the packet at `packet_key`: its callback data is
/// dropped and no callback runs.
pub fn on_timeout_packet_execute<Ctx>(
    ctx: &mut Ctx,
    registry: &IcaCallbackRegistry<Ctx>,
    packet_key: &PacketKey,
) -> Result<(), InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    let Some(callback_data) = ctx.callback_data(packet_key)? else {
        debug!(%packet_key, "no callback data for timed out packet");
        return Ok(());
    };

    handle_response(ctx, registry, callback_data, AckResponse::Timeout)
}

fn handle_response<Ctx>(
    ctx: &mut Ctx,
    registry: &IcaCallbackRegistry<Ctx>,
    callback_data: CallbackData,
    response: AckResponse,
) -> Result<(), InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    let CallbackData {
        key: packet_key,
        callback_id,
        callback_args,
    } = callback_data;

    let (outcome, failure) = match response {
        AckResponse::Timeout => {
            warn!(%packet_key, %callback_id, "packet timed out");
            (AckOutcome::Timeout, None)
        }
        AckResponse::Failure(reason) => {
            warn!(%packet_key, %callback_id, %reason, "transaction failed on host");
            (AckOutcome::Failure, Some(reason))
        }
        AckResponse::Success(tx_msg_data) => {
            match registry.first_handler(&callback_id) {
                Some((module, callback)) => {
                    if let Err(e) = callback(&mut *ctx, &packet_key, &tx_msg_data, &callback_args) {
                        error!(%packet_key, module, %callback_id, error = %e, "transaction callback failed");
                        return Err(e);
                    }
                    info!(%packet_key, module, %callback_id, "transaction callback executed");
                }
                None => {
                    warn!(%packet_key, %callback_id, "no module owns the callback; acknowledgement ignored");
                }
            }
            (AckOutcome::Success, None)
        }
    };

    ctx.delete_callback_data(&packet_key)?;
    debug!(%packet_key, "callback data consumed");

    ctx.emit_module_event(
        AcknowledgementEvent {
            packet_key,
            callback_id,
            outcome,
            error: failure,
        }
        .into(),
    )?;

    Ok(())
}
