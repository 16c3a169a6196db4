use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;

use crate::error::InterchainQueryError;
use crate::proto::v1::DataPoint as RawDataPoint;
use crate::QueryId;

/// The latest verified answer to a query, cached for readers that tolerate a
/// bounded staleness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPoint {
    pub id: QueryId,
    /// Remote height at which the value was read.
    pub remote_height: u64,
    /// Host height at which the answer was accepted.
    pub local_height: u64,
    pub value: Vec<u8>,
}

impl DataPoint {
    /// A data point accepted at `local_height` is stale at `current_height`
    /// once more than `max_age` blocks have passed.
    pub fn is_stale(&self, current_height: u64, max_age: u64) -> bool {
        self.local_height < current_height.saturating_sub(max_age)
    }
}

impl Protobuf<RawDataPoint> for DataPoint {}

impl TryFrom<RawDataPoint> for DataPoint {
    type Error = InterchainQueryError;

    fn try_from(raw: RawDataPoint) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id.into(),
            remote_height: raw.remote_height,
            local_height: raw.local_height,
            value: raw.value,
        })
    }
}

impl From<DataPoint> for RawDataPoint {
    fn from(value: DataPoint) -> Self {
        Self {
            id: value.id.into(),
            remote_height: value.remote_height,
            local_height: value.local_height,
            value: value.value,
        }
    }
}
