//! Turn envelopes exchanged with the voice platform
//!
//! Intent-name routing happens here, once, at the boundary: everything past
//! [`TurnRequest::into_event`] works with typed [`Event`]s.

use crate::quiz::SlotInput;
use crate::state_machine::{Event, SessionState};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const YES_INTENT: &str = "AMAZON.YesIntent";
pub const NO_INTENT: &str = "AMAZON.NoIntent";
pub const ANSWER_INTENT: &str = "AnswerIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

/// One inbound turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundTurn {
    pub request: TurnRequest,
    /// Session from the previous turn, kept opaque until the runtime decodes it
    #[serde(default)]
    pub session: Option<Value>,
}

/// What the user did this turn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnRequest {
    Launch,
    Intent {
        name: String,
        #[serde(default)]
        slot: Option<SlotPayload>,
    },
    SessionEnded {
        #[serde(default)]
        reason: Option<String>,
    },
}

/// Answer slot as the platform sends it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotPayload {
    #[serde(default)]
    pub resolved_name: Option<String>,
    #[serde(default)]
    pub raw_text: Option<String>,
}

impl TurnRequest {
    pub fn kind(&self) -> &str {
        match self {
            TurnRequest::Launch => "launch",
            TurnRequest::Intent { name, .. } => name,
            TurnRequest::SessionEnded { .. } => "session_ended",
        }
    }

    /// Route the request to a state machine event
    pub fn into_event(self) -> Event {
        match self {
            TurnRequest::Launch => Event::Launch,
            TurnRequest::SessionEnded { reason } => Event::SessionEnded { reason },
            TurnRequest::Intent { name, slot } => match name.as_str() {
                YES_INTENT => Event::BeginQuiz,
                NO_INTENT => Event::Decline,
                ANSWER_INTENT => {
                    let slot = slot.unwrap_or_default();
                    Event::SubmitAnswer(SlotInput::from_parts(slot.resolved_name, slot.raw_text))
                }
                CANCEL_INTENT | STOP_INTENT => Event::Stop,
                FALLBACK_INTENT => Event::Fallback,
                _ => Event::Unhandled(name),
            },
        }
    }
}

/// One outbound turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundTurn {
    pub prompt_text: String,
    pub reprompt_text: Option<String>,
    pub end_session: bool,
    /// Session to send back next turn; `None` when it could not be decoded
    pub session: Option<SessionState>,
}

impl OutboundTurn {
    /// Prompt and reprompt with the same text, conversation stays open
    pub fn ask(text: impl Into<String>, session: Option<SessionState>) -> Self {
        let text = text.into();
        Self {
            reprompt_text: Some(text.clone()),
            prompt_text: text,
            end_session: false,
            session,
        }
    }
}
