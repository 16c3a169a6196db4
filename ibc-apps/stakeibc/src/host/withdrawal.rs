use ibc_app_interchain_accounts::controller::handler::{submit_txs_stride_epoch, IcaTx};
use ibc_app_interchain_accounts::types::IcaAccountType;
use ibc_app_interchain_query::callback::QueryCallbackRegistry;
use ibc_app_interchain_query::handler::{make_request, QueryRequest};
use ibc_app_interchain_query::types::{QueryId, BANK_STORE_QUERY_WITH_PROOF};
use ibc_core_host_types::identifiers::Sequence;
use ibc_primitives::prelude::*;
use ibc_primitives::proto::Any;
use prost::Message;
use subtle_encoding::bech32;
use tracing::{error, info};

use crate::context::StakeIbcExecutionContext;
use crate::error::StakeIbcError;
use crate::proto::cosmos::{MsgSetWithdrawAddress, MSG_SET_WITHDRAW_ADDRESS_TYPE_URL};
use crate::types::{HostZone, ICQ_CALLBACK_WITHDRAWAL_BALANCE};
use crate::MODULE_ID_STR;

/// Prefix of the bank store keys holding account balances.
const BALANCES_PREFIX: u8 = 0x02;

/// Key prefix of every balance of `address` in the bank store:
/// `0x02 | len(address) | address`.
pub fn account_balances_prefix(address: &[u8]) -> Result<Vec<u8>, StakeIbcError> {
    let len = u8::try_from(address.len()).map_err(|_| StakeIbcError::InvalidAddress {
        address: format!("{address:02x?}"),
        reason: "address longer than 255 bytes".to_string(),
    })?;

    let mut prefix = Vec::with_capacity(address.len() + 2);
    prefix.push(BALANCES_PREFIX);
    prefix.push(len);
    prefix.extend_from_slice(address);
    Ok(prefix)
}

/// Decodes a bech32 account address of the zone.
pub fn decode_address(zone: &HostZone, address: &str) -> Result<Vec<u8>, StakeIbcError> {
    let (hrp, bytes) = bech32::decode(address).map_err(|e| StakeIbcError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })?;

    if hrp != zone.bech32_prefix {
        return Err(StakeIbcError::InvalidAddress {
            address: address.to_string(),
            reason: format!("expected prefix `{}`, got `{hrp}`", zone.bech32_prefix),
        });
    }

    Ok(bytes)
}

/// Directs the staking rewards of the zone's delegation account to its
/// withdrawal account.
///
/// Zones whose accounts are not registered yet are skipped: returns `None`.
pub fn set_withdrawal_address_on_host<Ctx>(
    ctx: &mut Ctx,
    zone: &HostZone,
) -> Result<Option<Sequence>, StakeIbcError>
where
    Ctx: StakeIbcExecutionContext,
{
    let accounts = zone
        .ica_account(IcaAccountType::Delegation)
        .and_then(|delegation| {
            zone.ica_account(IcaAccountType::Withdrawal)
                .map(|withdrawal| (delegation, withdrawal))
        });
    let (delegation_account, withdrawal_account) = match accounts {
        Ok(accounts) => accounts,
        Err(e) => {
            error!(chain_id = %zone.chain_id, error = %e, "cannot set withdrawal address");
            return Ok(None);
        }
    };

    info!(
        chain_id = %zone.chain_id,
        delegator = %delegation_account.address,
        withdraw_address = %withdrawal_account.address,
        connection_id = %zone.connection_id,
        "setting withdrawal address on host zone"
    );

    let msg = MsgSetWithdrawAddress {
        delegator_address: delegation_account.address.clone(),
        withdraw_address: withdrawal_account.address.clone(),
    };
    let message = Any {
        type_url: MSG_SET_WITHDRAW_ADDRESS_TYPE_URL.to_string(),
        value: msg.encode_to_vec(),
    };

    let tx = IcaTx::new(
        zone.connection_id.clone(),
        delegation_account.clone(),
        vec![message],
    );

    Ok(Some(submit_txs_stride_epoch(ctx, tx)?))
}

/// Queries the balance of the zone's withdrawal account, in the zone's host
/// denomination. The answer is handled by the withdrawal balance callback.
pub fn update_withdrawal_balance<Ctx>(
    ctx: &mut Ctx,
    registry: &QueryCallbackRegistry<Ctx>,
    zone: &HostZone,
) -> Result<QueryId, StakeIbcError>
where
    Ctx: StakeIbcExecutionContext,
{
    let withdrawal_account = zone.ica_account(IcaAccountType::Withdrawal)?;
    let address = decode_address(zone, &withdrawal_account.address)?;

    let mut key = account_balances_prefix(&address)?;
    key.extend_from_slice(zone.host_denom.as_bytes());

    info!(
        chain_id = %zone.chain_id,
        query_type = BANK_STORE_QUERY_WITH_PROOF,
        denom = %zone.host_denom,
        "querying withdrawal balance"
    );

    let request = QueryRequest::new(
        zone.connection_id.as_str(),
        zone.chain_id.as_str(),
        BANK_STORE_QUERY_WITH_PROOF,
        key,
    )
    .with_callback(MODULE_ID_STR, ICQ_CALLBACK_WITHDRAWAL_BALANCE);

    make_request(ctx, registry, request).map_err(Into::into)
}
