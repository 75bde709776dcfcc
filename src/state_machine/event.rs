//! Events that drive the quiz state machine

use crate::quiz::SlotInput;
use crate::trivia::{FetchError, QuestionRecord};

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // Conversation lifecycle
    Launch,
    SessionEnded {
        reason: Option<String>,
    },

    // Quiz intents
    BeginQuiz,
    Decline,
    SubmitAnswer(SlotInput),

    // Generic intents
    Stop,
    Fallback,
    /// An intent this skill has no handler for
    Unhandled(String),

    // Question source outcomes
    QuestionsFetched(Vec<QuestionRecord>),
    FetchFailed(FetchError),
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Launch => "launch",
            Event::SessionEnded { .. } => "session_ended",
            Event::BeginQuiz => "begin_quiz",
            Event::Decline => "decline",
            Event::SubmitAnswer(_) => "submit_answer",
            Event::Stop => "stop",
            Event::Fallback => "fallback",
            Event::Unhandled(_) => "unhandled",
            Event::QuestionsFetched(_) => "questions_fetched",
            Event::FetchFailed(_) => "fetch_failed",
        }
    }
}
