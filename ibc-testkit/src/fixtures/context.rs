use core::time::Duration;

use ibc_app_interchain_accounts::types::Params;
use ibc_core_host_types::identifiers::ChainId;
use typed_builder::TypedBuilder;

use crate::context::{MockContext, MockStore};

pub const DEFAULT_BLOCK_TIME_SECS: u64 = 3;

/// 2023-01-01T00:00:00Z, in unix nanoseconds.
pub const YEAR_2023_NANOS: u64 = 1_672_531_200_000_000_000;

/// Configuration for a `MockContext` type.
#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = MockContext))]
pub struct MockContextConfig {
    #[builder(default = ChainId::new("stride-1").expect("Never fails"))]
    host_id: ChainId,

    #[builder(default = Duration::from_secs(DEFAULT_BLOCK_TIME_SECS))]
    block_time: Duration,

    #[builder(default = 5)]
    latest_height: u64,

    #[builder(default = YEAR_2023_NANOS)]
    latest_timestamp: u64,

    #[builder(default)]
    ica_params: Params,
}

impl From<MockContextConfig> for MockContext {
    fn from(params: MockContextConfig) -> Self {
        assert_ne!(
            params.latest_height, 0,
            "The chain must have a non-zero height"
        );

        Self {
            host_chain_id: params.host_id,
            host_height: params.latest_height,
            host_timestamp: params.latest_timestamp,
            block_time: params.block_time,
            store: MockStore {
                ica_params: params.ica_params,
                ..Default::default()
            },
        }
    }
}
