use ibc_app_interchain_accounts::controller::handler::{submit_txs_stride_epoch, IcaTx};
use ibc_app_interchain_accounts::types::IcaAccountType;
use ibc_app_interchain_query::callback::CallbackOutcome;
use ibc_app_interchain_query::types::error::InterchainQueryError;
use ibc_app_interchain_query::types::Query;
use ibc_primitives::prelude::*;
use ibc_primitives::proto::{Any, Protobuf};
use ibc_proto::cosmos::base::v1beta1::Coin as RawCoin;
use prost::Message;
use tracing::info;

use crate::context::StakeIbcExecutionContext;
use crate::error::StakeIbcError;
use crate::proto::cosmos::{MsgSend, MSG_SEND_TYPE_URL};
use crate::types::{Coin, ReinvestCallback, ICA_CALLBACK_REINVEST};

/// Receives the balance of a zone's withdrawal account and sends it to the
/// delegation account to be reinvested. An empty balance is left alone.
pub fn withdrawal_balance_callback<Ctx>(
    ctx: &mut Ctx,
    result: &[u8],
    query: &Query,
) -> Result<CallbackOutcome, InterchainQueryError>
where
    Ctx: StakeIbcExecutionContext,
{
    info!(query_id = %query.id, chain_id = %query.chain_id, "withdrawal balance callback executing");
    sweep_withdrawal_account(ctx, result, query)?;
    Ok(CallbackOutcome::Success)
}

fn sweep_withdrawal_account<Ctx>(
    ctx: &mut Ctx,
    result: &[u8],
    query: &Query,
) -> Result<(), StakeIbcError>
where
    Ctx: StakeIbcExecutionContext,
{
    let chain_id = query.chain_id.as_str();
    let zone = ctx
        .host_zone(chain_id)?
        .ok_or_else(|| StakeIbcError::HostZoneNotFound {
            chain_id: chain_id.to_string(),
        })?;

    // an absent balance is proven by non-membership and arrives empty
    if result.is_empty() {
        info!(chain_id, "withdrawal account holds no balance");
        return Ok(());
    }

    let raw = RawCoin::decode(result).map_err(|e| StakeIbcError::UnmarshalFailure {
        reason: e.to_string(),
    })?;
    let balance = Coin::try_from(raw)?;

    if balance.is_zero() {
        info!(chain_id, denom = %balance.denom, "withdrawal account holds no balance");
        return Ok(());
    }

    let withdrawal_account = zone.ica_account(IcaAccountType::Withdrawal)?.clone();
    let delegation_account = zone.ica_account(IcaAccountType::Delegation)?;

    let send = MsgSend {
        from_address: withdrawal_account.address.clone(),
        to_address: delegation_account.address.clone(),
        amount: vec![balance.clone().into()],
    };
    let message = Any {
        type_url: MSG_SEND_TYPE_URL.to_string(),
        value: send.encode_to_vec(),
    };

    let callback_args = ReinvestCallback {
        reinvest_amount: balance.clone(),
        host_zone_id: chain_id.to_string(),
    }
    .encode_vec();

    let tx = IcaTx::new(zone.connection_id.clone(), withdrawal_account, vec![message])
        .with_callback(ICA_CALLBACK_REINVEST, callback_args);
    let sequence = submit_txs_stride_epoch(ctx, tx)?;

    info!(chain_id, %balance, %sequence, "withdrawal balance sent for reinvestment");

    Ok(())
}
