//! Defines all interchain query event types
use ibc_core_host_types::identifiers::{ChainId, ConnectionId};
use ibc_core_router_types::event::{ModuleEvent, ModuleEventAttribute};
use ibc_primitives::prelude::*;
use subtle_encoding::hex;

use crate::{QueryId, QueryType, MODULE_ID_STR};

const EVENT_TYPE_QUERY_REQUEST: &str = "query_request";
const EVENT_TYPE_QUERY_RESPONSE: &str = "query_response";

/// Contains all events variants that can be emitted from the interchain query application
pub enum Event {
    Request(QueryRequestEvent),
    Response(QueryResponseEvent),
}

/// Event emitted by the dispatch cycle for every query that relayers should
/// answer in this block.
pub struct QueryRequestEvent {
    pub query_id: QueryId,
    pub connection_id: ConnectionId,
    pub chain_id: ChainId,
    pub query_type: QueryType,
    pub request: Vec<u8>,
    pub height: i64,
}

impl From<QueryRequestEvent> for ModuleEvent {
    fn from(ev: QueryRequestEvent) -> Self {
        let QueryRequestEvent {
            query_id,
            connection_id,
            chain_id,
            query_type,
            request,
            height,
        } = ev;
        Self {
            kind: EVENT_TYPE_QUERY_REQUEST.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("query_id", query_id).into(),
                ("connection_id", connection_id).into(),
                ("chain_id", chain_id).into(),
                ("type", query_type).into(),
                ("request", String::from_utf8_lossy(&hex::encode(request))).into(),
                ("height", height).into(),
            ],
        }
    }
}

/// Event emitted once a query response has been verified and handed to its
/// callback.
pub struct QueryResponseEvent {
    pub query_id: QueryId,
    pub chain_id: ChainId,
    pub height: i64,
    pub retained: bool,
    /// Timestamp of the consensus state the answer was proven against.
    pub remote_timestamp: Option<u64>,
}

impl From<QueryResponseEvent> for ModuleEvent {
    fn from(ev: QueryResponseEvent) -> Self {
        let QueryResponseEvent {
            query_id,
            chain_id,
            height,
            retained,
            remote_timestamp,
        } = ev;
        let mut attributes: Vec<ModuleEventAttribute> = vec![
            ("module", MODULE_ID_STR).into(),
            ("query_id", query_id).into(),
            ("chain_id", chain_id).into(),
            ("height", height).into(),
            ("retained", retained).into(),
        ];
        if let Some(timestamp) = remote_timestamp {
            attributes.push(("remote_timestamp", timestamp).into());
        }
        Self {
            kind: EVENT_TYPE_QUERY_RESPONSE.to_string(),
            attributes,
        }
    }
}

impl From<Event> for ModuleEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::Request(ev) => ev.into(),
            Event::Response(ev) => ev.into(),
        }
    }
}
