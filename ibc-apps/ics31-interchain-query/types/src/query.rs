use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_core_host_types::identifiers::{ChainId, ConnectionId};
use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;

use crate::error::InterchainQueryError;
use crate::proto::v1::Query as RawQuery;
use crate::QueryId;

const STORE_QUERY_PREFIX: &str = "store";
const KEY_QUERY_SUFFIX: &str = "key";

/// The path a query is routed to on the remote chain, e.g. `store/bank/key`.
///
/// Types ending in `key` are raw store lookups whose answers carry an ICS-23
/// proof; they must have the form `store/<substore>/key`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryType(String);

impl QueryType {
    pub fn new(query_type: impl Into<String>) -> Result<Self, InterchainQueryError> {
        let query_type = query_type.into();

        let invalid = || InterchainQueryError::InvalidQueryType {
            query_type: query_type.clone(),
        };

        if query_type.trim().is_empty() {
            return Err(invalid());
        }

        let parts: Vec<&str> = query_type.split('/').collect();

        if parts.last() == Some(&KEY_QUERY_SUFFIX) {
            match parts.as_slice() {
                [STORE_QUERY_PREFIX, substore, KEY_QUERY_SUFFIX] if !substore.is_empty() => {}
                _ => return Err(invalid()),
            }
        }

        Ok(Self(query_type))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether responses to this query must carry a proof.
    pub fn requires_proof(&self) -> bool {
        self.0.rsplit('/').next() == Some(KEY_QUERY_SUFFIX)
    }

    /// The substore a proof-carrying query reads from, `bank` for `store/bank/key`.
    pub fn store_name(&self) -> Option<&str> {
        if !self.requires_proof() {
            return None;
        }
        self.0.split('/').nth(1)
    }
}

impl FromStr for QueryType {
    type Err = InterchainQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for QueryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

/// A pending interchain query.
///
/// `id` always equals the fingerprint of the defining attributes. `period` is
/// the number of blocks between two dispatches of the query; a negative
/// period marks a one-shot query that is removed once it has been answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub id: QueryId,
    pub connection_id: ConnectionId,
    pub chain_id: ChainId,
    pub query_type: QueryType,
    pub request: Vec<u8>,
    pub period: i64,
    pub callback_module: String,
    pub callback_id: String,
    pub ttl: u64,
    pub last_height: u64,
    pub height: i64,
}

impl Query {
    /// Whether the query must be announced to relayers at `current_height`:
    /// it has never been dispatched, or exactly one period has elapsed since
    /// the last dispatch.
    pub fn is_due(&self, current_height: u64) -> bool {
        self.last_height == 0
            || i128::from(self.last_height) + i128::from(self.period)
                == i128::from(current_height)
    }

    pub fn is_one_shot(&self) -> bool {
        self.period < 0
    }

    pub fn has_callback(&self) -> bool {
        !self.callback_module.is_empty() && !self.callback_id.is_empty()
    }
}

impl Protobuf<RawQuery> for Query {}

impl TryFrom<RawQuery> for Query {
    type Error = InterchainQueryError;

    fn try_from(raw: RawQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id.into(),
            connection_id: raw.connection_id.parse()?,
            chain_id: ChainId::new(&raw.chain_id)?,
            query_type: QueryType::new(raw.query_type)?,
            request: raw.request,
            period: raw.period,
            callback_module: raw.callback_module,
            callback_id: raw.callback_id,
            ttl: raw.ttl,
            last_height: raw.last_height,
            height: raw.height,
        })
    }
}

impl From<Query> for RawQuery {
    fn from(query: Query) -> Self {
        Self {
            id: query.id.into(),
            connection_id: query.connection_id.to_string(),
            chain_id: query.chain_id.to_string(),
            query_type: query.query_type.to_string(),
            request: query.request,
            period: query.period,
            last_height: query.last_height,
            callback_id: query.callback_id,
            ttl: query.ttl,
            height: query.height,
            callback_module: query.callback_module,
        }
    }
}
