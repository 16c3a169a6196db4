use ibc_app_callbacks::CallbackRegistry;
use ibc_app_interchain_accounts::controller::callback::{
    on_acknowledgement_packet_execute, on_timeout_packet_execute, IcaCallbackFn,
    IcaCallbackRegistry, IcaCallbacks,
};
use ibc_app_interchain_accounts::controller::handler::{
    compute_epoch_timeout, submit_txs, submit_txs_stride_epoch, IcaTx,
};
use ibc_app_interchain_accounts::types::acknowledgement::{
    error_acknowledgement, success_acknowledgement, MsgData, TxMsgData,
};
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::packet::{IcaPacketType, InterchainAccountPacketData};
use ibc_app_interchain_accounts::types::{IcaAccount, IcaAccountType, PacketKey, Params};
use ibc_core_host_types::identifiers::{ConnectionId, Sequence};
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::proto::{Any, Protobuf};
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::applications::stakeibc::{
    dummy_account_address, dummy_connection_id, with_dummy_host_zone, STRIDE_EPOCH_DURATION,
};
use rstest::rstest;

const CALLBACK_EVENT: &str = "test_callback";

fn record_ack(
    ctx: &mut MockContext,
    packet_key: &PacketKey,
    tx_msg_data: &TxMsgData,
    args: &[u8],
) -> Result<(), InterchainAccountError> {
    ctx.store.events.push(ModuleEvent {
        kind: CALLBACK_EVENT.to_string(),
        attributes: vec![
            ("packet_key", packet_key.to_string()).into(),
            ("responses", tx_msg_data.data.len()).into(),
            ("args", String::from_utf8_lossy(args).into_owned()).into(),
        ],
    });
    Ok(())
}

fn failing_ack(
    _ctx: &mut MockContext,
    _packet_key: &PacketKey,
    _tx_msg_data: &TxMsgData,
    _args: &[u8],
) -> Result<(), InterchainAccountError> {
    Err(InterchainAccountError::Callback("callback failed".to_string()))
}

fn registry() -> IcaCallbackRegistry<MockContext> {
    let mut builder = CallbackRegistry::builder();
    builder
        .register(
            "recorder",
            IcaCallbacks::new().with("record", record_ack as IcaCallbackFn<MockContext>),
        )
        .unwrap()
        .register(
            "failer",
            IcaCallbacks::new().with("fail", failing_ack as IcaCallbackFn<MockContext>),
        )
        .unwrap();
    builder.build()
}

fn ctx() -> MockContext {
    with_dummy_host_zone(MockContext::default())
}

fn message() -> Any {
    Any {
        type_url: "/cosmos.bank.v1beta1.MsgSend".to_string(),
        value: vec![1, 2, 3],
    }
}

fn tx(account_type: IcaAccountType) -> IcaTx {
    IcaTx::new(
        dummy_connection_id(),
        IcaAccount::new(dummy_account_address(10), account_type),
        vec![message()],
    )
}

fn success_ack() -> Vec<u8> {
    success_acknowledgement(&TxMsgData {
        data: vec![MsgData {
            msg_type: "/cosmos.bank.v1beta1.MsgSend".to_string(),
            data: vec![],
        }],
        msg_responses: vec![],
    })
    .unwrap()
}

fn callback_events(ctx: &MockContext) -> Vec<&ModuleEvent> {
    ctx.get_events()
        .iter()
        .filter(|event| event.kind == CALLBACK_EVENT)
        .collect()
}

#[test_log::test]
fn submitted_tx_is_sent_as_execute_tx_packet() {
    let mut ctx = ctx();
    let timeout = ctx.host_timestamp + 1_000;

    let sequence = submit_txs(
        &mut ctx,
        tx(IcaAccountType::Delegation).with_callback("record", b"args".to_vec()),
        timeout,
    )
    .unwrap();

    assert_eq!(sequence, Sequence::from(1));
    let packet = ctx.last_sent_packet().unwrap().clone();
    assert_eq!(packet.timeout_timestamp, timeout);
    assert_eq!(
        Some(packet.key.channel_id.clone()),
        ctx.active_channel_id(&dummy_connection_id(), IcaAccountType::Delegation)
    );
    assert_eq!(packet.key.port_id.as_str(), "icacontroller-gaia-1.DELEGATION");

    let data = InterchainAccountPacketData::decode_vec(&packet.data).unwrap();
    assert_eq!(data.packet_type, IcaPacketType::ExecuteTx);
    assert_eq!(data.cosmos_tx().unwrap().messages, vec![message()]);

    let callback_data = &ctx.store.callback_data[&packet.key];
    assert_eq!(callback_data.callback_id, "record");
    assert_eq!(callback_data.callback_args, b"args".to_vec());
    assert!(ctx.get_events().iter().any(|event| event.kind == "submit_tx"));
}

#[test_log::test]
fn callback_data_requires_arguments() {
    let mut ctx = ctx();
    let timeout = ctx.host_timestamp + 1_000;

    submit_txs(&mut ctx, tx(IcaAccountType::Delegation), timeout).unwrap();
    let mut without_args = tx(IcaAccountType::Delegation);
    without_args.callback_id = "record".to_string();
    submit_txs(&mut ctx, without_args, timeout).unwrap();

    assert_eq!(ctx.sent_packets().len(), 2);
    assert!(ctx.store.callback_data.is_empty());
}

#[test_log::test]
fn sequences_increase_per_account_channel() {
    let mut ctx = ctx();
    let timeout = ctx.host_timestamp + 1_000;

    let first = submit_txs(&mut ctx, tx(IcaAccountType::Delegation), timeout).unwrap();
    let second = submit_txs(&mut ctx, tx(IcaAccountType::Delegation), timeout).unwrap();
    let withdrawal = submit_txs(&mut ctx, tx(IcaAccountType::Withdrawal), timeout).unwrap();

    assert_eq!(first, Sequence::from(1));
    assert_eq!(second, Sequence::from(2));
    assert_eq!(withdrawal, Sequence::from(1));
}

#[rstest]
#[case::no_channel(tx(IcaAccountType::Fee), "ChannelNotFound")]
#[case::no_messages(IcaTx::new(dummy_connection_id(), IcaAccount::new("", IcaAccountType::Delegation), vec![]), "EmptyMessages")]
#[case::unknown_connection(IcaTx::new(ConnectionId::new(9), IcaAccount::new("", IcaAccountType::Delegation), vec![message()]), "ConnectionNotFound")]
fn unroutable_tx_is_rejected(#[case] tx: IcaTx, #[case] expected: &str) {
    let mut ctx = ctx();
    let timeout = ctx.host_timestamp + 1_000;

    let err = submit_txs(&mut ctx, tx, timeout).unwrap_err();

    assert!(format!("{err:?}").starts_with(expected), "{err:?}");
    assert!(ctx.sent_packets().is_empty());
}

#[test_log::test]
fn channel_without_capability_is_rejected() {
    let ctx = ctx();
    let port_id = ctx.controller_port_id(&dummy_connection_id(), IcaAccountType::Fee);
    let mut ctx = ctx.with_active_channel(dummy_connection_id(), port_id, false);
    let timeout = ctx.host_timestamp + 1_000;

    assert!(matches!(
        submit_txs(&mut ctx, tx(IcaAccountType::Fee), timeout),
        Err(InterchainAccountError::CapabilityMissing { .. })
    ));
}

#[test_log::test]
fn disabled_controller_rejects_tx() {
    let mut ctx = ctx().with_ica_params(Params {
        controller_enabled: false,
        ..Default::default()
    });
    let timeout = ctx.host_timestamp + 1_000;

    assert!(matches!(
        submit_txs(&mut ctx, tx(IcaAccountType::Delegation), timeout),
        Err(InterchainAccountError::ControllerDisabled)
    ));
}

#[test_log::test]
fn epoch_timeout_leaves_buffer_before_next_epoch() {
    let mut ctx = ctx();
    let duration = STRIDE_EPOCH_DURATION.as_nanos() as u64;
    let next_epoch_start = ctx.host_timestamp + duration;

    submit_txs_stride_epoch(&mut ctx, tx(IcaAccountType::Delegation)).unwrap();

    let expected = next_epoch_start - duration / 5;
    assert_eq!(compute_epoch_timeout(&ctx, "stride_epoch").unwrap(), expected);
    assert_eq!(ctx.last_sent_packet().unwrap().timeout_timestamp, expected);
}

#[rstest]
#[case::missing_epoch("day", 5, "EpochNotFound")]
#[case::zero_buffer("stride_epoch", 0, "InvalidBuffer")]
fn epoch_timeout_errors(#[case] epoch_id: &str, #[case] buffer_size: u64, #[case] expected: &str) {
    let ctx = ctx().with_ica_params(Params {
        buffer_size,
        ..Default::default()
    });

    let err = compute_epoch_timeout(&ctx, epoch_id).unwrap_err();

    assert!(format!("{err:?}").starts_with(expected), "{err:?}");
}

fn submit_with_callback(ctx: &mut MockContext, callback_id: &str) -> PacketKey {
    let timeout = ctx.host_timestamp + 1_000;
    submit_txs(
        ctx,
        tx(IcaAccountType::Delegation).with_callback(callback_id, b"args".to_vec()),
        timeout,
    )
    .unwrap();
    ctx.last_sent_packet().unwrap().key.clone()
}

#[test_log::test]
fn successful_ack_runs_callback() {
    let mut ctx = ctx();
    let registry = registry();
    let packet_key = submit_with_callback(&mut ctx, "record");

    on_acknowledgement_packet_execute(&mut ctx, &registry, &packet_key, &success_ack()).unwrap();

    let calls = callback_events(&ctx);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].attributes[0].value, packet_key.to_string());
    assert_eq!(calls[0].attributes[1].value, "1");
    assert_eq!(calls[0].attributes[2].value, "args");
    assert!(ctx.store.callback_data.is_empty());
    assert!(ctx
        .get_events()
        .iter()
        .any(|event| event.kind == "ica_acknowledgement"));
}

#[rstest]
#[case::error_ack(Some(error_acknowledgement("out of gas").unwrap()))]
#[case::timeout(None)]
fn unsuccessful_packet_skips_callback(#[case] acknowledgement: Option<Vec<u8>>) {
    let mut ctx = ctx();
    let registry = registry();
    let packet_key = submit_with_callback(&mut ctx, "record");

    let res = match acknowledgement {
        Some(ack) => on_acknowledgement_packet_execute(&mut ctx, &registry, &packet_key, &ack),
        None => on_timeout_packet_execute(&mut ctx, &registry, &packet_key),
    };

    res.unwrap();

    assert!(callback_events(&ctx).is_empty());
    assert!(ctx.store.callback_data.is_empty());
}

#[test_log::test]
fn malformed_ack_is_an_error() {
    let mut ctx = ctx();
    let registry = registry();
    let packet_key = submit_with_callback(&mut ctx, "record");

    assert!(matches!(
        on_acknowledgement_packet_execute(&mut ctx, &registry, &packet_key, b"not json"),
        Err(InterchainAccountError::AckDeserialization { .. })
    ));
    assert!(ctx.store.callback_data.contains_key(&packet_key));
}

#[test_log::test]
fn ack_without_callback_data_is_a_no_op() {
    let mut ctx = ctx();
    let registry = registry();
    let timeout = ctx.host_timestamp + 1_000;
    submit_txs(&mut ctx, tx(IcaAccountType::Delegation), timeout).unwrap();
    let packet_key = ctx.last_sent_packet().unwrap().key.clone();
    let events = ctx.get_events().len();

    on_acknowledgement_packet_execute(&mut ctx, &registry, &packet_key, &success_ack()).unwrap();

    assert_eq!(ctx.get_events().len(), events);
}

#[test_log::test]
fn unregistered_callback_is_skipped() {
    let mut ctx = ctx();
    let registry = registry();
    let packet_key = submit_with_callback(&mut ctx, "unknown");

    on_acknowledgement_packet_execute(&mut ctx, &registry, &packet_key, &success_ack()).unwrap();

    assert!(callback_events(&ctx).is_empty());
    assert!(ctx.store.callback_data.is_empty());
}

#[test_log::test]
fn failing_callback_rolls_back_acknowledgement() {
    let mut ctx = ctx();
    let registry = registry();
    let packet_key = submit_with_callback(&mut ctx, "fail");

    let res = ctx.transact(|ctx| {
        on_acknowledgement_packet_execute(ctx, &registry, &packet_key, &success_ack())
    });

    assert!(matches!(res, Err(InterchainAccountError::Callback(_))));
    assert!(ctx.store.callback_data.contains_key(&packet_key));
}
