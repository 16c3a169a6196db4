use ibc_app_interchain_accounts::controller::callback::{
    on_acknowledgement_packet_execute, on_timeout_packet_execute,
};
use ibc_app_interchain_accounts::types::acknowledgement::{
    error_acknowledgement, success_acknowledgement, MsgData, TxMsgData,
};
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::packet::InterchainAccountPacketData;
use ibc_app_interchain_accounts::types::{IcaAccountType, PacketKey};
use ibc_app_interchain_query::handler::submit_query_response;
use ibc_app_stakeibc::host::{
    account_balances_prefix, decode_address, delegate_on_host, set_withdrawal_address_on_host,
    update_withdrawal_balance,
};
use ibc_app_stakeibc::proto::cosmos::{
    MsgDelegate, MsgSend, MsgSetWithdrawAddress, MSG_DELEGATE_TYPE_URL, MSG_SEND_TYPE_URL,
    MSG_SET_WITHDRAW_ADDRESS_TYPE_URL,
};
use ibc_app_stakeibc::types::{
    Coin, DepositRecord, DepositRecordSource, DepositRecordStatus, HostZone,
};
use ibc_core_host_types::identifiers::Sequence;
use ibc_primitives::proto::{Any, Protobuf};
use ibc_proto::cosmos::base::v1beta1::Coin as RawCoin;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::applications::interchain_query::dummy_query_response;
use ibc_testkit::fixtures::applications::stakeibc::{
    dummy_connection_id, dummy_host_zone, dummy_validator_address, stakeibc_ica_registry,
    stakeibc_icq_registry, with_dummy_host_zone, HOST_CHAIN_ID, HOST_DENOM,
};
use prost::Message;
use rstest::rstest;

const DEPOSIT_RECORD_ID: u64 = 0;

fn deposit_record(amount: u64) -> DepositRecord {
    DepositRecord {
        id: DEPOSIT_RECORD_ID,
        amount,
        denom: HOST_DENOM.to_string(),
        host_zone_id: HOST_CHAIN_ID.to_string(),
        status: DepositRecordStatus::Stake,
        source: DepositRecordSource::Stride,
        deposit_epoch_number: 1,
    }
}

fn ctx() -> MockContext {
    with_dummy_host_zone(MockContext::default()).with_deposit_record(deposit_record(150))
}

fn zone(ctx: &MockContext) -> HostZone {
    ctx.store.host_zones[HOST_CHAIN_ID].clone()
}

fn sent_messages(ctx: &MockContext) -> Vec<Any> {
    let packet = ctx.last_sent_packet().unwrap();
    InterchainAccountPacketData::decode_vec(&packet.data)
        .unwrap()
        .cosmos_tx()
        .unwrap()
        .messages
}

fn success_ack(msg_type: &str) -> Vec<u8> {
    success_acknowledgement(&TxMsgData {
        data: vec![MsgData {
            msg_type: msg_type.to_string(),
            data: vec![],
        }],
        msg_responses: vec![],
    })
    .unwrap()
}

fn delegate(ctx: &mut MockContext, amount: u64) -> PacketKey {
    let zone = zone(ctx);
    delegate_on_host(ctx, &zone, Coin::new(HOST_DENOM, amount), DEPOSIT_RECORD_ID).unwrap();
    ctx.last_sent_packet().unwrap().key.clone()
}

fn delegation_of(zone: &HostZone, seed: u8) -> u64 {
    zone.validator(&dummy_validator_address(seed))
        .unwrap()
        .delegation_amt
}

#[test_log::test]
fn delegation_is_split_by_weight() {
    let mut ctx = ctx();

    let packet_key = delegate(&mut ctx, 150);

    assert_eq!(packet_key.sequence, Sequence::from(1));
    assert_eq!(
        Some(packet_key.channel_id.clone()),
        ctx.active_channel_id(&dummy_connection_id(), IcaAccountType::Delegation)
    );

    let delegations: Vec<(String, String)> = sent_messages(&ctx)
        .into_iter()
        .map(|any| {
            assert_eq!(any.type_url, MSG_DELEGATE_TYPE_URL);
            let msg = MsgDelegate::decode(any.value.as_slice()).unwrap();
            (msg.validator_address, msg.amount.unwrap().amount)
        })
        .collect();
    assert_eq!(
        delegations,
        vec![
            (dummy_validator_address(1), "100".to_string()),
            (dummy_validator_address(2), "50".to_string()),
        ]
    );
    assert!(ctx.store.callback_data.contains_key(&packet_key));
}

#[test_log::test]
fn acknowledged_delegation_is_settled() {
    let mut ctx = ctx();
    let registry = stakeibc_ica_registry();
    let packet_key = delegate(&mut ctx, 150);

    on_acknowledgement_packet_execute(
        &mut ctx,
        &registry,
        &packet_key,
        &success_ack(MSG_DELEGATE_TYPE_URL),
    )
    .unwrap();

    let zone = zone(&ctx);
    assert_eq!(zone.staked_bal, 150);
    assert_eq!(delegation_of(&zone, 1), 100);
    assert_eq!(delegation_of(&zone, 2), 50);
    assert!(ctx.store.deposit_records.is_empty());
    assert!(ctx.store.callback_data.is_empty());
}

#[rstest]
#[case::error_ack(Some(error_acknowledgement("insufficient funds").unwrap()))]
#[case::timeout(None)]
fn unsuccessful_delegation_changes_nothing(#[case] acknowledgement: Option<Vec<u8>>) {
    let mut ctx = ctx();
    let registry = stakeibc_ica_registry();
    let packet_key = delegate(&mut ctx, 150);

    let res = match acknowledgement {
        Some(ack) => on_acknowledgement_packet_execute(&mut ctx, &registry, &packet_key, &ack),
        None => on_timeout_packet_execute(&mut ctx, &registry, &packet_key),
    };

    res.unwrap();
    assert_eq!(zone(&ctx), dummy_host_zone());
    assert!(ctx.store.deposit_records.contains_key(&DEPOSIT_RECORD_ID));
    assert!(ctx.store.callback_data.is_empty());
}

#[test_log::test]
fn delegation_to_removed_validator_is_rolled_back() {
    let mut ctx = ctx();
    let registry = stakeibc_ica_registry();
    let packet_key = delegate(&mut ctx, 150);

    let mut zone = zone(&ctx);
    zone.validators.retain(|v| v.address != dummy_validator_address(2));
    let mut ctx = ctx.with_host_zone(zone.clone());

    let res = ctx.transact(|ctx| {
        on_acknowledgement_packet_execute(
            ctx,
            &registry,
            &packet_key,
            &success_ack(MSG_DELEGATE_TYPE_URL),
        )
    });

    assert!(matches!(res, Err(InterchainAccountError::Callback(_))));
    assert_eq!(self::zone(&ctx), zone);
    assert!(ctx.store.deposit_records.contains_key(&DEPOSIT_RECORD_ID));
    assert!(ctx.store.callback_data.contains_key(&packet_key));
}

#[test_log::test]
fn delegating_nothing_is_rejected() {
    let mut ctx = ctx();
    let zone = zone(&ctx);

    assert!(delegate_on_host(&mut ctx, &zone, Coin::new(HOST_DENOM, 0), DEPOSIT_RECORD_ID).is_err());
    assert!(ctx.sent_packets().is_empty());
}

#[test_log::test]
fn withdrawal_address_is_set_from_delegation_account() {
    let mut ctx = ctx();
    let zone = zone(&ctx);

    let sequence = set_withdrawal_address_on_host(&mut ctx, &zone).unwrap();

    assert_eq!(sequence, Some(Sequence::from(1)));
    let messages = sent_messages(&ctx);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].type_url, MSG_SET_WITHDRAW_ADDRESS_TYPE_URL);
    let msg = MsgSetWithdrawAddress::decode(messages[0].value.as_slice()).unwrap();
    assert_eq!(msg.delegator_address, zone.delegation_account.unwrap().address);
    assert_eq!(msg.withdraw_address, zone.withdrawal_account.unwrap().address);
    assert!(ctx.store.callback_data.is_empty());
}

#[test_log::test]
fn zone_without_withdrawal_account_is_skipped() {
    let mut zone = dummy_host_zone();
    zone.withdrawal_account = None;
    let mut ctx = ctx().with_host_zone(zone.clone());

    assert_eq!(set_withdrawal_address_on_host(&mut ctx, &zone).unwrap(), None);
    assert!(ctx.sent_packets().is_empty());
}

#[test_log::test]
fn withdrawal_balance_query_reads_bank_store() {
    let mut ctx = ctx();
    let zone = zone(&ctx);

    let query_id = update_withdrawal_balance(&mut ctx, &stakeibc_icq_registry(), &zone).unwrap();

    let query = &ctx.store.queries[&query_id];
    let address = decode_address(&zone, &zone.withdrawal_account.as_ref().unwrap().address).unwrap();
    let mut key = account_balances_prefix(&address).unwrap();
    key.extend_from_slice(HOST_DENOM.as_bytes());
    assert_eq!(query.request, key);
    assert_eq!(query.query_type.as_str(), "store/bank/key");
    assert_eq!(query.callback_module, "stakeibc");
    assert_eq!(query.callback_id, "withdrawalbalance");
    assert!(query.is_one_shot());
}

fn answer_withdrawal_balance(ctx: &mut MockContext, result: Vec<u8>) {
    let zone = zone(ctx);
    let registry = stakeibc_icq_registry();
    let query_id = update_withdrawal_balance(ctx, &registry, &zone).unwrap();
    let query = ctx.store.queries[&query_id].clone();

    let msg = dummy_query_response(ctx, &query, 10, result);
    submit_query_response(ctx, &registry, msg).unwrap();
    assert!(ctx.store.queries.is_empty());
}

#[test_log::test]
fn withdrawal_balance_is_reinvested() {
    let mut ctx = ctx();
    let balance = RawCoin {
        denom: HOST_DENOM.to_string(),
        amount: "1000".to_string(),
    };

    answer_withdrawal_balance(&mut ctx, balance.encode_to_vec());

    let packet_key = ctx.last_sent_packet().unwrap().key.clone();
    assert_eq!(
        Some(packet_key.channel_id.clone()),
        ctx.active_channel_id(&dummy_connection_id(), IcaAccountType::Withdrawal)
    );
    let messages = sent_messages(&ctx);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].type_url, MSG_SEND_TYPE_URL);
    let send = MsgSend::decode(messages[0].value.as_slice()).unwrap();
    let zone = zone(&ctx);
    assert_eq!(send.from_address, zone.withdrawal_account.clone().unwrap().address);
    assert_eq!(send.to_address, zone.delegation_account.clone().unwrap().address);
    assert_eq!(send.amount, vec![balance]);
    assert_eq!(ctx.store.callback_data[&packet_key].callback_id, "reinvest");

    on_acknowledgement_packet_execute(
        &mut ctx,
        &stakeibc_ica_registry(),
        &packet_key,
        &success_ack(MSG_SEND_TYPE_URL),
    )
    .unwrap();

    let reinvested: Vec<_> = ctx
        .store
        .deposit_records
        .values()
        .filter(|record| record.source == DepositRecordSource::WithdrawalIca)
        .collect();
    assert_eq!(reinvested.len(), 1);
    assert_eq!(reinvested[0].amount, 1000);
    assert_eq!(reinvested[0].denom, HOST_DENOM);
    assert_eq!(reinvested[0].host_zone_id, HOST_CHAIN_ID);
    assert_eq!(reinvested[0].status, DepositRecordStatus::Stake);
    assert_eq!(reinvested[0].deposit_epoch_number, 1);
    assert_ne!(reinvested[0].id, DEPOSIT_RECORD_ID);
}

#[rstest]
#[case::absent(vec![])]
#[case::zero(RawCoin { denom: HOST_DENOM.to_string(), amount: "0".to_string() }.encode_to_vec())]
fn empty_withdrawal_balance_is_left_alone(#[case] result: Vec<u8>) {
    let mut ctx = ctx();

    answer_withdrawal_balance(&mut ctx, result);

    assert!(ctx.sent_packets().is_empty());
}
