//! Quiz session state

use crate::quiz::{Shuffle, MIN_INCORRECT_ANSWERS, OPTION_COUNT};
use crate::trivia::QuestionRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Default number of questions per quiz
pub const DEFAULT_QUESTION_COUNT: usize = 6;

/// Conversation-scoped quiz state, round-tripped by the caller between turns.
///
/// An empty JSON object decodes to the initial (not started) session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    /// Fixed once the quiz starts
    pub questions: Vec<QuestionRecord>,
    pub current_question_index: usize,
    /// One entry per presented question, each in `0..4`
    pub correct_option_index_by_question: Vec<usize>,
    pub score: usize,
    pub is_playing: bool,
    /// Set once the "ready to start?" prompt has been spoken
    pub start_offered: bool,
}

/// Where the session is in the quiz lifecycle, derived from [`SessionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    AwaitingStart,
    InProgress,
    Finished,
}

impl QuizPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            QuizPhase::NotStarted => "not_started",
            QuizPhase::AwaitingStart => "awaiting_start",
            QuizPhase::InProgress => "in_progress",
            QuizPhase::Finished => "finished",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionDecodeError {
    #[error("session does not decode: {0}")]
    Decode(String),
    #[error("session invariant violated: {0}")]
    Invariant(String),
}

impl SessionState {
    /// Fresh session after the welcome prompt
    pub fn offered() -> Self {
        Self {
            start_offered: true,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> QuizPhase {
        if self.is_playing {
            QuizPhase::InProgress
        } else if !self.questions.is_empty() {
            QuizPhase::Finished
        } else if self.start_offered {
            QuizPhase::AwaitingStart
        } else {
            QuizPhase::NotStarted
        }
    }

    /// Decode a caller-supplied session; absent or `null` is a new session
    pub fn from_wire(value: Option<Value>) -> Result<Self, SessionDecodeError> {
        let state = match value {
            None | Some(Value::Null) => Self::default(),
            Some(v) => serde_json::from_value::<Self>(v)
                .map_err(|e| SessionDecodeError::Decode(e.to_string()))?,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check the structural invariants of a session
    pub fn validate(&self) -> Result<(), SessionDecodeError> {
        let total = self.questions.len();
        let presented = self.correct_option_index_by_question.len();

        if let Some(bad) = self
            .correct_option_index_by_question
            .iter()
            .find(|&&i| i >= OPTION_COUNT)
        {
            return Err(invariant(format!("correct option index {bad} out of range")));
        }
        if self.current_question_index > total {
            return Err(invariant(format!(
                "question index {} beyond {total} questions",
                self.current_question_index
            )));
        }
        if self.score > self.current_question_index {
            return Err(invariant(format!(
                "score {} exceeds {} answered questions",
                self.score, self.current_question_index
            )));
        }
        if presented > total {
            return Err(invariant(format!(
                "{presented} correct indices for {total} questions"
            )));
        }
        if let Some((i, short)) = self
            .questions
            .iter()
            .enumerate()
            .find(|(_, q)| q.incorrect_answers.len() < MIN_INCORRECT_ANSWERS)
        {
            return Err(invariant(format!(
                "question {i} has {} incorrect answers, need {MIN_INCORRECT_ANSWERS}",
                short.incorrect_answers.len()
            )));
        }

        if self.is_playing {
            if total == 0 {
                return Err(invariant("playing without questions".to_string()));
            }
            if self.current_question_index >= total {
                return Err(invariant("playing past the last question".to_string()));
            }
            if presented != self.current_question_index + 1 {
                return Err(invariant(format!(
                    "{presented} correct indices at question {}",
                    self.current_question_index
                )));
            }
        }

        Ok(())
    }
}

/// Context for transitions (immutable configuration)
#[derive(Clone)]
pub struct QuizContext {
    pub shuffler: Arc<dyn Shuffle>,
    /// Questions requested when a quiz starts
    pub question_count: usize,
}

impl QuizContext {
    pub fn new(shuffler: Arc<dyn Shuffle>, question_count: usize) -> Self {
        Self {
            shuffler,
            question_count,
        }
    }
}

fn invariant(message: String) -> SessionDecodeError {
    SessionDecodeError::Invariant(message)
}
