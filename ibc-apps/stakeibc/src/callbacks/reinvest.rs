use ibc_app_interchain_accounts::types::acknowledgement::TxMsgData;
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::{PacketKey, STRIDE_EPOCH};
use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;
use tracing::info;

use crate::context::StakeIbcExecutionContext;
use crate::error::StakeIbcError;
use crate::types::{DepositRecord, DepositRecordSource, DepositRecordStatus, ReinvestCallback};

/// Records rewards swept into the delegation account as a new deposit,
/// ready to be staked, stamped with the current stride epoch.
pub fn reinvest_callback<Ctx>(
    ctx: &mut Ctx,
    packet_key: &PacketKey,
    _tx_msg_data: &TxMsgData,
    args: &[u8],
) -> Result<(), InterchainAccountError>
where
    Ctx: StakeIbcExecutionContext,
{
    info!(%packet_key, "reinvest callback executing");
    record_reinvestment(ctx, args).map_err(Into::into)
}

fn record_reinvestment<Ctx>(ctx: &mut Ctx, args: &[u8]) -> Result<(), StakeIbcError>
where
    Ctx: StakeIbcExecutionContext,
{
    let callback = ReinvestCallback::decode_vec(args).map_err(|e| {
        StakeIbcError::UnmarshalFailure {
            reason: e.to_string(),
        }
    })?;

    let epoch = ctx
        .epoch_tracker(STRIDE_EPOCH)?
        .ok_or_else(|| StakeIbcError::EpochNotFound {
            epoch_id: STRIDE_EPOCH.to_string(),
        })?;

    let record_id = ctx.append_deposit_record(DepositRecord {
        id: 0,
        amount: callback.reinvest_amount.amount,
        denom: callback.reinvest_amount.denom,
        host_zone_id: callback.host_zone_id,
        status: DepositRecordStatus::Stake,
        source: DepositRecordSource::WithdrawalIca,
        deposit_epoch_number: epoch.epoch_number,
    })?;

    info!(
        record_id,
        epoch_number = epoch.epoch_number,
        "reinvestment deposit recorded"
    );

    Ok(())
}
