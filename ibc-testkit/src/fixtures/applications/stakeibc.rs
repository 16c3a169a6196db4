use core::time::Duration;

use ibc_app_callbacks::CallbackRegistry;
use ibc_app_interchain_accounts::controller::callback::IcaCallbackRegistry;
use ibc_app_interchain_accounts::types::{EpochTracker, IcaAccount, IcaAccountType, STRIDE_EPOCH};
use ibc_app_interchain_query::callback::QueryCallbackRegistry;
use ibc_app_stakeibc::callbacks::{register_ica_callbacks, register_icq_callbacks};
use ibc_app_stakeibc::types::{HostZone, Validator};
use ibc_core_client_types::Height;
use ibc_core_host_types::identifiers::{ChainId, ConnectionId};
use ibc_primitives::prelude::*;
use subtle_encoding::bech32;

use crate::context::MockContext;
use crate::fixtures::proofs::simple_proof_specs;

pub const HOST_CHAIN_ID: &str = "gaia-1";
pub const HOST_DENOM: &str = "uatom";
pub const BECH32_PREFIX: &str = "cosmos";

const VALOPER_PREFIX: &str = "cosmosvaloper";

/// Duration of the stride epoch of dummy contexts.
pub const STRIDE_EPOCH_DURATION: Duration = Duration::from_secs(6 * 60 * 60);

/// Returns a dummy bech32 account address of the host zone, for testing
/// purposes only!
pub fn dummy_account_address(seed: u8) -> String {
    bech32::encode(BECH32_PREFIX, [seed; 20])
}

/// Returns a dummy bech32 validator address, for testing purposes only!
pub fn dummy_validator_address(seed: u8) -> String {
    bech32::encode(VALOPER_PREFIX, [seed; 20])
}

pub fn dummy_connection_id() -> ConnectionId {
    ConnectionId::new(0)
}

pub fn dummy_host_chain_id() -> ChainId {
    ChainId::new(HOST_CHAIN_ID).expect("Never fails")
}

/// Returns a dummy [`HostZone`] with two validators of weight 2 and 1 and
/// registered delegation and withdrawal accounts, for testing purposes only!
pub fn dummy_host_zone() -> HostZone {
    HostZone {
        chain_id: dummy_host_chain_id(),
        connection_id: dummy_connection_id(),
        host_denom: HOST_DENOM.to_string(),
        bech32_prefix: BECH32_PREFIX.to_string(),
        staked_bal: 0,
        validators: vec![
            Validator {
                address: dummy_validator_address(1),
                delegation_amt: 0,
                weight: 2,
            },
            Validator {
                address: dummy_validator_address(2),
                delegation_amt: 0,
                weight: 1,
            },
        ],
        delegation_account: Some(IcaAccount::new(
            dummy_account_address(10),
            IcaAccountType::Delegation,
        )),
        withdrawal_account: Some(IcaAccount::new(
            dummy_account_address(11),
            IcaAccountType::Withdrawal,
        )),
    }
}

/// Returns a dummy stride epoch tracker starting its next epoch one full
/// epoch after `now`, for testing purposes only!
pub fn dummy_stride_epoch(now: u64, epoch_number: u64) -> EpochTracker {
    let duration = u64::try_from(STRIDE_EPOCH_DURATION.as_nanos()).expect("Never fails");
    EpochTracker {
        epoch_identifier: STRIDE_EPOCH.to_string(),
        epoch_number,
        next_epoch_start_time: now + duration,
        duration,
    }
}

/// Extends `ctx` with everything the dummy host zone needs: its connection,
/// a light client, open delegation and withdrawal accounts, and the stride
/// epoch.
pub fn with_dummy_host_zone(ctx: MockContext) -> MockContext {
    let now = ctx.host_timestamp;
    let zone = dummy_host_zone();
    let connection_id = zone.connection_id.clone();

    ctx.with_connection(connection_id.clone(), zone.chain_id.clone())
        .with_light_client(
            connection_id.clone(),
            simple_proof_specs(),
            Height::new(zone.chain_id.revision_number(), 1).expect("Never fails"),
        )
        .with_interchain_account(connection_id.clone(), IcaAccountType::Delegation)
        .with_interchain_account(connection_id, IcaAccountType::Withdrawal)
        .with_epoch_tracker(dummy_stride_epoch(now, 1))
        .with_host_zone(zone)
}

/// Transaction callback registry holding the staking callbacks.
pub fn stakeibc_ica_registry() -> IcaCallbackRegistry<MockContext> {
    let mut builder = CallbackRegistry::builder();
    register_ica_callbacks(&mut builder).expect("first registration");
    builder.build()
}

/// Query callback registry holding the staking callbacks.
pub fn stakeibc_icq_registry() -> QueryCallbackRegistry<MockContext> {
    let mut builder = CallbackRegistry::builder();
    register_icq_callbacks(&mut builder).expect("first registration");
    builder.build()
}
