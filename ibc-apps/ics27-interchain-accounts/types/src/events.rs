//! Defines all interchain accounts controller event types
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_core_router_types::event::{ModuleEvent, ModuleEventAttribute};
use ibc_primitives::prelude::*;

use crate::{PacketKey, MODULE_ID_STR};

const EVENT_TYPE_SUBMIT_TX: &str = "submit_tx";
const EVENT_TYPE_ACKNOWLEDGEMENT: &str = "ica_acknowledgement";

/// Contains all events variants that can be emitted from the controller
pub enum Event {
    SubmitTx(SubmitTxEvent),
    Acknowledgement(AcknowledgementEvent),
}

/// Event emitted when a transaction is sent to an interchain account.
pub struct SubmitTxEvent {
    pub connection_id: ConnectionId,
    pub packet_key: PacketKey,
    pub messages: usize,
    pub timeout_timestamp: u64,
    pub callback_id: String,
}

impl From<SubmitTxEvent> for ModuleEvent {
    fn from(ev: SubmitTxEvent) -> Self {
        let SubmitTxEvent {
            connection_id,
            packet_key,
            messages,
            timeout_timestamp,
            callback_id,
        } = ev;
        Self {
            kind: EVENT_TYPE_SUBMIT_TX.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("connection_id", connection_id).into(),
                ("packet_key", packet_key).into(),
                ("messages", messages).into(),
                ("timeout_timestamp", timeout_timestamp).into(),
                ("callback_id", callback_id).into(),
            ],
        }
    }
}

/// Outcome of an acknowledgement, as recorded in its event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AckOutcome {
    Success,
    Failure,
    Timeout,
}

impl AckOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Timeout => "timeout",
        }
    }
}

/// Event emitted once the acknowledgement or timeout of a packet with
/// callback data has been handled.
pub struct AcknowledgementEvent {
    pub packet_key: PacketKey,
    pub callback_id: String,
    pub outcome: AckOutcome,
    pub error: Option<String>,
}

impl From<AcknowledgementEvent> for ModuleEvent {
    fn from(ev: AcknowledgementEvent) -> Self {
        let AcknowledgementEvent {
            packet_key,
            callback_id,
            outcome,
            error,
        } = ev;
        let mut attributes: Vec<ModuleEventAttribute> = vec![
            ("module", MODULE_ID_STR).into(),
            ("packet_key", packet_key).into(),
            ("callback_id", callback_id).into(),
            ("outcome", outcome.as_str()).into(),
        ];
        if let Some(error) = error {
            attributes.push(("error", error).into());
        }
        Self {
            kind: EVENT_TYPE_ACKNOWLEDGEMENT.to_string(),
            attributes,
        }
    }
}

impl From<Event> for ModuleEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::SubmitTx(ev) => ev.into(),
            Event::Acknowledgement(ev) => ev.into(),
        }
    }
}
