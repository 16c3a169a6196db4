use alloc::collections::BTreeMap;

use ibc_app_interchain_accounts::controller::handler::{submit_txs_stride_epoch, IcaTx};
use ibc_app_interchain_accounts::types::IcaAccountType;
use ibc_core_host_types::identifiers::Sequence;
use ibc_primitives::prelude::*;
use ibc_primitives::proto::{Any, Protobuf};
use prost::Message;
use tracing::{debug, info};

use crate::context::StakeIbcExecutionContext;
use crate::error::StakeIbcError;
use crate::proto::cosmos::{MsgDelegate, MSG_DELEGATE_TYPE_URL};
use crate::types::{Coin, DelegateCallback, HostZone, SplitDelegation, ICA_CALLBACK_DELEGATE};

/// Splits `amount` across the zone's validators in proportion to their
/// weights. Shares are rounded down; the heaviest validator receives the
/// remainder.
pub fn target_delegation_amounts(
    zone: &HostZone,
    amount: u64,
) -> Result<BTreeMap<String, u64>, StakeIbcError> {
    if amount == 0 {
        return Err(StakeIbcError::InvalidAmount {
            amount: amount.to_string(),
        });
    }

    let total_weight = u128::from(zone.total_validator_weight());
    if total_weight == 0 {
        return Err(StakeIbcError::NoValidatorWeights {
            chain_id: zone.chain_id.to_string(),
        });
    }

    let mut validators: Vec<_> = zone.validators.iter().collect();
    validators.sort_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.address.cmp(&b.address)));

    let mut targets = BTreeMap::new();
    let mut allocated = 0u64;
    let last = validators.len() - 1;

    for (i, validator) in validators.into_iter().enumerate() {
        let target = if i == last {
            amount - allocated
        } else {
            // weight <= total_weight, so the share never exceeds `amount`
            let share = u128::from(validator.weight) * u128::from(amount) / total_weight;
            u64::try_from(share).map_err(|_| StakeIbcError::InvalidAmount {
                amount: share.to_string(),
            })?
        };
        allocated += target;
        targets.insert(validator.address.clone(), target);
    }

    Ok(targets)
}

/// Delegates `amount` from the zone's delegation account, split across its
/// validators by weight. The acknowledgement is settled by the delegate
/// callback, which removes the deposit record `deposit_record_id`.
pub fn delegate_on_host<Ctx>(
    ctx: &mut Ctx,
    zone: &HostZone,
    amount: Coin,
    deposit_record_id: u64,
) -> Result<Sequence, StakeIbcError>
where
    Ctx: StakeIbcExecutionContext,
{
    let delegation_account = zone.ica_account(IcaAccountType::Delegation)?.clone();
    let targets = target_delegation_amounts(zone, amount.amount)?;

    let mut messages = Vec::new();
    let mut split_delegations = Vec::new();

    for validator in &zone.validators {
        let target = targets.get(&validator.address).copied().unwrap_or_default();

        if target > 0 {
            debug!(
                delegator = %delegation_account.address,
                validator = %validator.address,
                amount = target,
                "delegating to validator"
            );
            let delegate = MsgDelegate {
                delegator_address: delegation_account.address.clone(),
                validator_address: validator.address.clone(),
                amount: Some(Coin::new(amount.denom.clone(), target).into()),
            };
            messages.push(Any {
                type_url: MSG_DELEGATE_TYPE_URL.to_string(),
                value: delegate.encode_to_vec(),
            });
        }

        split_delegations.push(SplitDelegation {
            validator: validator.address.clone(),
            amount: target,
        });
    }

    let callback_args = DelegateCallback {
        host_zone_id: zone.chain_id.to_string(),
        deposit_record_id,
        split_delegations,
    }
    .encode_vec();

    let tx = IcaTx::new(zone.connection_id.clone(), delegation_account, messages)
        .with_callback(ICA_CALLBACK_DELEGATE, callback_args);
    let sequence = submit_txs_stride_epoch(ctx, tx)?;

    info!(
        chain_id = %zone.chain_id,
        %amount,
        deposit_record_id,
        %sequence,
        "delegation sent to host zone"
    );

    Ok(sequence)
}
