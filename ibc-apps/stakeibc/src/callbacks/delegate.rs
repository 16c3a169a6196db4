use ibc_app_interchain_accounts::types::acknowledgement::TxMsgData;
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::PacketKey;
use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;
use tracing::{info, warn};

use crate::context::StakeIbcExecutionContext;
use crate::error::StakeIbcError;
use crate::types::DelegateCallback;

/// Settles an acknowledged delegation: every split is credited to its
/// validator and to the zone's staked balance, and the deposit record that
/// funded it is removed.
///
/// Nothing is written unless every split applies.
pub fn delegate_callback<Ctx>(
    ctx: &mut Ctx,
    packet_key: &PacketKey,
    _tx_msg_data: &TxMsgData,
    args: &[u8],
) -> Result<(), InterchainAccountError>
where
    Ctx: StakeIbcExecutionContext,
{
    info!(%packet_key, "delegate callback executing");
    settle_delegation(ctx, args).map_err(Into::into)
}

fn settle_delegation<Ctx>(ctx: &mut Ctx, args: &[u8]) -> Result<(), StakeIbcError>
where
    Ctx: StakeIbcExecutionContext,
{
    let callback = DelegateCallback::decode_vec(args).map_err(|e| {
        StakeIbcError::UnmarshalFailure {
            reason: e.to_string(),
        }
    })?;

    let mut zone =
        ctx.host_zone(&callback.host_zone_id)?
            .ok_or_else(|| StakeIbcError::HostZoneNotFound {
                chain_id: callback.host_zone_id.clone(),
            })?;

    for split in &callback.split_delegations {
        let invalid_amount = || StakeIbcError::InvalidAmount {
            amount: split.amount.to_string(),
        };

        zone.staked_bal = zone
            .staked_bal
            .checked_add(split.amount)
            .ok_or_else(invalid_amount)?;

        let validator =
            zone.validator_mut(&split.validator)
                .ok_or_else(|| StakeIbcError::ValidatorNotFound {
                    validator: split.validator.clone(),
                    chain_id: callback.host_zone_id.clone(),
                })?;
        validator.delegation_amt = validator
            .delegation_amt
            .checked_add(split.amount)
            .ok_or_else(invalid_amount)?;

        info!(
            validator = %split.validator,
            amount = split.amount,
            "delegation added to validator"
        );
    }

    ctx.store_host_zone(zone)?;

    if ctx.deposit_record(callback.deposit_record_id)?.is_some() {
        ctx.remove_deposit_record(callback.deposit_record_id)?;
    } else {
        warn!(
            record_id = callback.deposit_record_id,
            "delegated deposit record already removed"
        );
    }

    info!(host_zone = %callback.host_zone_id, "delegation settled");

    Ok(())
}
