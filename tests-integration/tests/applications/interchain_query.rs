use ibc_app_callbacks::CallbackRegistry;
use ibc_app_interchain_query::callback::{
    CallbackOutcome, QueryCallbackFn, QueryCallbackRegistry, QueryCallbacks,
};
use ibc_app_interchain_query::handler::{
    begin_block, get_datapoint_or_request, make_request, submit_query_response,
    DataPointOutcome, QueryRequest,
};
use ibc_app_interchain_query::types::error::{CommitmentError, InterchainQueryError};
use ibc_app_interchain_query::types::msgs::MsgSubmitQueryResponse;
use ibc_app_interchain_query::types::{Query, QueryId, BANK_STORE_QUERY_WITH_PROOF};
use ibc_core_router_types::event::ModuleEvent;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::applications::interchain_query::dummy_query_response;
use ibc_testkit::fixtures::applications::stakeibc::{with_dummy_host_zone, HOST_CHAIN_ID};
use rstest::rstest;

const CALLBACK_EVENT: &str = "test_callback";

fn record_call(ctx: &mut MockContext, module: &str) {
    ctx.store.events.push(ModuleEvent {
        kind: CALLBACK_EVENT.to_string(),
        attributes: vec![("module", module).into()],
    });
}

fn alpha(
    ctx: &mut MockContext,
    _result: &[u8],
    _query: &Query,
) -> Result<CallbackOutcome, InterchainQueryError> {
    record_call(ctx, "alpha");
    Ok(CallbackOutcome::Success)
}

fn beta(
    ctx: &mut MockContext,
    _result: &[u8],
    _query: &Query,
) -> Result<CallbackOutcome, InterchainQueryError> {
    record_call(ctx, "beta");
    Ok(CallbackOutcome::Success)
}

fn retaining(
    ctx: &mut MockContext,
    _result: &[u8],
    _query: &Query,
) -> Result<CallbackOutcome, InterchainQueryError> {
    record_call(ctx, "retainer");
    Ok(CallbackOutcome::SuccessRetain)
}

fn failing(
    _ctx: &mut MockContext,
    _result: &[u8],
    _query: &Query,
) -> Result<CallbackOutcome, InterchainQueryError> {
    Err(InterchainQueryError::Callback("callback failed".to_string()))
}

fn registry() -> QueryCallbackRegistry<MockContext> {
    let mut builder = CallbackRegistry::builder();
    // registered out of order on purpose
    builder
        .register(
            "beta",
            QueryCallbacks::new().with("shared", beta as QueryCallbackFn<MockContext>),
        )
        .unwrap()
        .register(
            "alpha",
            QueryCallbacks::new().with("shared", alpha as QueryCallbackFn<MockContext>),
        )
        .unwrap()
        .register(
            "retainer",
            QueryCallbacks::new().with("retain", retaining as QueryCallbackFn<MockContext>),
        )
        .unwrap()
        .register(
            "failer",
            QueryCallbacks::new().with("fail", failing as QueryCallbackFn<MockContext>),
        )
        .unwrap();
    builder.build()
}

fn ctx() -> MockContext {
    with_dummy_host_zone(MockContext::default())
}

fn request(key: &[u8]) -> QueryRequest {
    QueryRequest::new(
        "connection-0",
        HOST_CHAIN_ID,
        BANK_STORE_QUERY_WITH_PROOF,
        key.to_vec(),
    )
}

fn called_modules(ctx: &MockContext) -> Vec<String> {
    ctx.get_events()
        .iter()
        .filter(|event| event.kind == CALLBACK_EVENT)
        .map(|event| event.attributes[0].value.clone())
        .collect()
}

fn events_of_kind<'a>(ctx: &'a MockContext, kind: &'a str) -> impl Iterator<Item = &'a ModuleEvent> {
    ctx.get_events().iter().filter(move |event| event.kind == kind)
}

#[test_log::test]
fn identical_requests_share_one_query() {
    let mut ctx = ctx();
    let registry = registry();

    let first = make_request(&mut ctx, &registry, request(b"\x02a")).unwrap();
    let second = make_request(&mut ctx, &registry, request(b"\x02a")).unwrap();
    let other = make_request(&mut ctx, &registry, request(b"\x02b")).unwrap();

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(ctx.store.queries.len(), 2);
}

#[test_log::test]
fn repeated_request_rearms_dispatched_query() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(&mut ctx, &registry, request(b"\x02a")).unwrap();
    assert_eq!(begin_block(&mut ctx).unwrap(), vec![query_id.clone()]);
    assert_eq!(ctx.store.queries[&query_id].last_height, ctx.host_height);

    // dispatched one-shot queries are not announced again
    ctx.advance_block();
    assert!(begin_block(&mut ctx).unwrap().is_empty());

    make_request(&mut ctx, &registry, request(b"\x02a")).unwrap();
    assert_eq!(ctx.store.queries[&query_id].last_height, 0);

    ctx.advance_block();
    assert_eq!(begin_block(&mut ctx).unwrap(), vec![query_id]);
}

#[test_log::test]
fn periodic_query_is_dispatched_once_per_period() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(&mut ctx, &registry, request(b"\x02a").with_period(3)).unwrap();
    let start = ctx.host_height;

    let mut dispatched_at = Vec::new();
    for _ in 0..7 {
        if !begin_block(&mut ctx).unwrap().is_empty() {
            dispatched_at.push(ctx.host_height - start);
        }
        ctx.advance_block();
    }

    assert_eq!(dispatched_at, vec![0, 3, 6]);
    assert_eq!(events_of_kind(&ctx, "query_request").count(), 3);
    assert!(ctx.store.queries.contains_key(&query_id));
}

#[rstest]
#[case(request(b"\x02a").with_callback("gamma", "shared"), "UnknownCallback")]
#[case(request(b"\x02a").with_callback("alpha", "missing"), "UnknownCallback")]
#[case(request(b"\x02a").for_module("gamma"), "UnknownCallback")]
#[case(request(b"\x02a").at_height(10), "InvalidHeight")]
fn invalid_request_is_rejected(#[case] request: QueryRequest, #[case] expected: &str) {
    let mut ctx = ctx();

    let err = make_request(&mut ctx, &registry(), request).unwrap_err();

    assert!(format!("{err:?}").starts_with(expected), "{err:?}");
    assert!(ctx.store.queries.is_empty());
}

#[test_log::test]
fn registered_module_without_callback_only_caches() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(
        &mut ctx,
        &registry,
        request(b"\x02a").for_module("alpha").with_ttl(5),
    )
    .unwrap();
    let query = ctx.store.queries[&query_id].clone();
    assert_eq!(query.callback_module, "alpha");
    assert!(query.callback_id.is_empty());
    ctx.advance_block();

    let msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    submit_query_response(&mut ctx, &registry, msg).unwrap();

    assert!(called_modules(&ctx).is_empty());
    assert_eq!(ctx.store.data_points[&query_id].value, b"value".to_vec());
    assert!(ctx.store.queries.is_empty());
}

#[test_log::test]
fn verified_response_runs_callbacks_in_module_order() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(
        &mut ctx,
        &registry,
        request(b"\x02a").with_callback("beta", "shared"),
    )
    .unwrap();
    let query = ctx.store.queries[&query_id].clone();

    let msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    submit_query_response(&mut ctx, &registry, msg).unwrap();

    assert_eq!(called_modules(&ctx), vec!["alpha", "beta"]);
    assert!(ctx.store.queries.is_empty());
    assert!(ctx.store.data_points.is_empty());
    assert_eq!(events_of_kind(&ctx, "query_response").count(), 1);
}

#[test_log::test]
fn retaining_callback_keeps_one_shot_query() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(
        &mut ctx,
        &registry,
        request(b"\x02a").with_callback("retainer", "retain"),
    )
    .unwrap();
    let query = ctx.store.queries[&query_id].clone();

    let msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    submit_query_response(&mut ctx, &registry, msg).unwrap();

    assert_eq!(called_modules(&ctx), vec!["retainer"]);
    assert!(ctx.store.queries.contains_key(&query_id));
}

#[test_log::test]
fn response_with_ttl_is_cached() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(
        &mut ctx,
        &registry,
        request(b"\x02a").with_callback("alpha", "shared").with_ttl(5),
    )
    .unwrap();
    let query = ctx.store.queries[&query_id].clone();
    ctx.advance_block();

    let msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    submit_query_response(&mut ctx, &registry, msg).unwrap();

    let data_point = &ctx.store.data_points[&query_id];
    assert_eq!(data_point.remote_height, 10);
    assert_eq!(data_point.local_height, ctx.host_height);
    assert_eq!(data_point.value, b"value".to_vec());
}

#[test_log::test]
fn absent_key_is_proven_by_non_membership() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(
        &mut ctx,
        &registry,
        request(b"\x02a").with_callback("alpha", "shared"),
    )
    .unwrap();
    let query = ctx.store.queries[&query_id].clone();

    let msg = dummy_query_response(&mut ctx, &query, 10, vec![]);
    submit_query_response(&mut ctx, &registry, msg).unwrap();

    assert_eq!(called_modules(&ctx), vec!["alpha", "beta"]);
}

#[test_log::test]
fn periodic_query_survives_response_unchanged() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(
        &mut ctx,
        &registry,
        request(b"\x02a").with_callback("alpha", "shared").with_period(3),
    )
    .unwrap();
    begin_block(&mut ctx).unwrap();
    let query = ctx.store.queries[&query_id].clone();
    ctx.advance_block();

    let msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    submit_query_response(&mut ctx, &registry, msg).unwrap();

    assert_eq!(called_modules(&ctx), vec!["alpha", "beta"]);
    assert_eq!(ctx.store.queries.get(&query_id), Some(&query));
    assert!(ctx.store.data_points.is_empty());

    let response = events_of_kind(&ctx, "query_response").next().unwrap();
    assert!(response
        .attributes
        .iter()
        .any(|attr| attr.key == "retained" && attr.value == "true"));
}

#[test_log::test]
fn repeated_response_is_ignored() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(
        &mut ctx,
        &registry,
        request(b"\x02a").with_callback("alpha", "shared").with_ttl(5),
    )
    .unwrap();
    let query = ctx.store.queries[&query_id].clone();

    let msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    submit_query_response(&mut ctx, &registry, msg.clone()).unwrap();
    assert!(ctx.store.queries.is_empty());

    let events_before = ctx.get_events().len();
    let data_points_before = ctx.store.data_points.clone();
    ctx.advance_block();
    submit_query_response(&mut ctx, &registry, msg).unwrap();

    assert_eq!(ctx.get_events().len(), events_before);
    assert_eq!(called_modules(&ctx), vec!["alpha", "beta"]);
    assert_eq!(ctx.store.data_points, data_points_before);
    assert!(ctx.store.queries.is_empty());
}

fn submit_with_corrupted_proof(
    corrupt: impl FnOnce(&mut MsgSubmitQueryResponse),
) -> (MockContext, QueryId, Result<(), InterchainQueryError>) {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(
        &mut ctx,
        &registry,
        request(b"\x02a").with_callback("alpha", "shared"),
    )
    .unwrap();
    let query = ctx.store.queries[&query_id].clone();

    let mut msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    corrupt(&mut msg);
    let res = submit_query_response(&mut ctx, &registry, msg);

    (ctx, query_id, res)
}

#[test_log::test]
fn undecodable_proof_is_invalid() {
    let (ctx, query_id, res) = submit_with_corrupted_proof(|msg| {
        msg.proof_ops.as_mut().unwrap().ops[0].data = vec![0xff, 0xff, 0xff];
    });

    assert!(matches!(
        res,
        Err(InterchainQueryError::ProofInvalid(
            CommitmentError::CommitmentProofDecodingFailed(_)
        ))
    ));
    assert!(called_modules(&ctx).is_empty());
    assert!(ctx.store.queries.contains_key(&query_id));
}

#[test_log::test]
fn truncated_proof_is_invalid() {
    let (ctx, query_id, res) = submit_with_corrupted_proof(|msg| {
        msg.proof_ops.as_mut().unwrap().ops.truncate(1);
    });

    assert!(matches!(
        res,
        Err(InterchainQueryError::ProofInvalid(
            CommitmentError::NumberOfSpecsMismatch
        ))
    ));
    assert!(called_modules(&ctx).is_empty());
    assert!(ctx.store.queries.contains_key(&query_id));
}

#[test_log::test]
fn response_to_unknown_query_is_ignored() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(&mut ctx, &registry, request(b"\x02a")).unwrap();
    let mut query = ctx.store.queries[&query_id].clone();
    query.id = QueryId::from("unknown".to_string());

    let msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    let events_before = ctx.get_events().len();
    submit_query_response(&mut ctx, &registry, msg).unwrap();

    assert_eq!(ctx.get_events().len(), events_before);
    assert!(ctx.store.queries.contains_key(&query_id));
}

#[test_log::test]
fn tampered_result_fails_verification() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(
        &mut ctx,
        &registry,
        request(b"\x02a").with_callback("alpha", "shared"),
    )
    .unwrap();
    let query = ctx.store.queries[&query_id].clone();

    let mut msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    msg.result = b"forged".to_vec();

    let err = submit_query_response(&mut ctx, &registry, msg).unwrap_err();
    assert!(matches!(
        err,
        InterchainQueryError::ProofInvalid(CommitmentError::VerificationFailure)
    ));
    assert!(called_modules(&ctx).is_empty());
    assert!(ctx.store.queries.contains_key(&query_id));
}

#[test_log::test]
fn response_without_proof_is_rejected() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(&mut ctx, &registry, request(b"\x02a")).unwrap();
    let query = ctx.store.queries[&query_id].clone();

    let mut msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    msg.proof_ops = None;

    assert!(matches!(
        submit_query_response(&mut ctx, &registry, msg),
        Err(InterchainQueryError::MissingProof { .. })
    ));
}

#[test_log::test]
fn response_beyond_light_client_is_rejected() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(&mut ctx, &registry, request(b"\x02a")).unwrap();
    let query = ctx.store.queries[&query_id].clone();

    let mut msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    msg.height = 20;

    assert!(matches!(
        submit_query_response(&mut ctx, &registry, msg),
        Err(InterchainQueryError::ClientBehind { .. })
    ));
}

#[test_log::test]
fn failing_callback_rolls_back_response() {
    let mut ctx = ctx();
    let registry = registry();

    let query_id = make_request(
        &mut ctx,
        &registry,
        request(b"\x02a").with_callback("failer", "fail").with_ttl(5),
    )
    .unwrap();
    let query = ctx.store.queries[&query_id].clone();
    let msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());

    let res = ctx.transact(|ctx| submit_query_response(ctx, &registry, msg));

    assert!(matches!(res, Err(InterchainQueryError::Callback(_))));
    assert!(ctx.store.queries.contains_key(&query_id));
    assert!(ctx.store.data_points.is_empty());
}

#[test_log::test]
fn data_point_is_requested_when_missing_or_stale() {
    let mut ctx = ctx();
    let registry = registry();
    let max_age = 3;

    let outcome =
        get_datapoint_or_request(&mut ctx, &registry, "alpha", request(b"\x02a"), max_age).unwrap();
    let DataPointOutcome::Requested(query_id) = outcome else {
        panic!("expected a request, got {outcome:?}");
    };
    let query = ctx.store.queries[&query_id].clone();
    assert_eq!(query.ttl, max_age);
    assert!(query.is_one_shot());

    let msg = dummy_query_response(&mut ctx, &query, 10, b"value".to_vec());
    submit_query_response(&mut ctx, &registry, msg).unwrap();
    assert!(ctx.store.queries.is_empty());

    ctx.advance_block();
    let outcome =
        get_datapoint_or_request(&mut ctx, &registry, "alpha", request(b"\x02a"), max_age).unwrap();
    assert!(matches!(outcome, DataPointOutcome::Fresh(ref data_point) if data_point.value == b"value"));
    assert!(ctx.store.queries.is_empty());

    let stale_height = ctx.host_height + max_age;
    let mut ctx = ctx.advance_block_up_to(stale_height);
    let outcome =
        get_datapoint_or_request(&mut ctx, &registry, "alpha", request(b"\x02a"), max_age).unwrap();
    assert_eq!(outcome, DataPointOutcome::StaleRequested(query_id.clone()));
    assert!(ctx.store.queries.contains_key(&query_id));
}
