//! Pure state transition function
//!
//! Every `(phase, event)` pair is routed by a single match; pairs with no
//! handler fall through to [`TransitionError::GuardViolation`] and the caller
//! answers them with a generic reflection prompt.

use super::{Effect, Event, QuizContext, QuizPhase, SessionState};
use crate::quiz::{build_options, resolve_letter, speech, SlotInput, MIN_INCORRECT_ANSWERS};
use crate::trivia::QuestionRecord;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: SessionState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("No transition from {phase:?} on {event}")]
    GuardViolation {
        phase: QuizPhase,
        event: &'static str,
    },
    #[error("Malformed session: {0}")]
    MalformedSession(String),
    #[error("Unusable question batch: {0}")]
    MalformedBatch(String),
}

/// Pure transition function.
///
/// Given the same state, context and event it always produces the same
/// result; with a seeded or order-preserving shuffler in the context it is
/// fully deterministic. The caller keeps `state` on error.
pub fn transition(
    state: &SessionState,
    context: &QuizContext,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    use QuizPhase::{AwaitingStart, Finished, InProgress, NotStarted};

    match (state.phase(), event) {
        // ============================================================
        // Conversation lifecycle
        // ============================================================
        (_, Event::Launch) => {
            Ok(TransitionResult::new(SessionState::offered()).with_effect(Effect::ask(speech::WELCOME)))
        }

        (_, Event::SessionEnded { .. }) => {
            Ok(TransitionResult::new(state.clone()).with_effect(Effect::EndSession))
        }

        // ============================================================
        // Starting a quiz
        // ============================================================
        (NotStarted | AwaitingStart | Finished, Event::BeginQuiz) => {
            Ok(TransitionResult::new(state.clone()).with_effect(Effect::FetchQuestions {
                count: context.question_count,
            }))
        }

        (NotStarted | AwaitingStart | Finished, Event::QuestionsFetched(questions)) => {
            start_quiz(context, questions)
        }

        // Session untouched so the user can simply ask again
        (_, Event::FetchFailed(_)) => {
            Ok(TransitionResult::new(state.clone()).with_effect(Effect::ask(speech::APOLOGY)))
        }

        (NotStarted | AwaitingStart | Finished, Event::Decline) => {
            Ok(TransitionResult::new(state.clone())
                .with_effect(Effect::say(speech::DECLINE))
                .with_effect(Effect::EndSession))
        }

        // ============================================================
        // Answering
        // ============================================================
        (InProgress, Event::SubmitAnswer(slot)) => answer_question(state, context, &slot),

        // ============================================================
        // Generic intents
        // ============================================================
        (_, Event::Stop) => Ok(TransitionResult::new(state.clone())
            .with_effect(Effect::say(speech::GOODBYE))
            .with_effect(Effect::EndSession)),

        (_, Event::Fallback) => {
            Ok(TransitionResult::new(state.clone()).with_effect(Effect::ask(speech::FALLBACK)))
        }

        // ============================================================
        // Everything else
        // ============================================================
        (
            phase,
            event @ (Event::BeginQuiz
            | Event::QuestionsFetched(_)
            | Event::Decline
            | Event::SubmitAnswer(_)
            | Event::Unhandled(_)),
        ) => Err(TransitionError::GuardViolation {
            phase,
            event: event.kind(),
        }),
    }
}

fn start_quiz(
    context: &QuizContext,
    questions: Vec<QuestionRecord>,
) -> Result<TransitionResult, TransitionError> {
    let first = questions
        .first()
        .ok_or_else(|| TransitionError::MalformedBatch("no questions".to_string()))?;

    // Every question in the batch must be able to fill four options
    if let Some((i, short)) = questions
        .iter()
        .enumerate()
        .find(|(_, q)| q.incorrect_answers.len() < MIN_INCORRECT_ANSWERS)
    {
        return Err(TransitionError::MalformedBatch(format!(
            "question {i} has {} incorrect answers, need {MIN_INCORRECT_ANSWERS}",
            short.incorrect_answers.len()
        )));
    }

    let (options, correct) = build_options(first, context.shuffler.as_ref())
        .map_err(|e| TransitionError::MalformedBatch(e.to_string()))?;
    let prompt = speech::first_question(&first.text, &options);

    let state = SessionState {
        questions,
        current_question_index: 0,
        correct_option_index_by_question: vec![correct],
        score: 0,
        is_playing: true,
        start_offered: true,
    };

    Ok(TransitionResult::new(state).with_effect(Effect::ask(prompt)))
}

fn answer_question(
    state: &SessionState,
    context: &QuizContext,
    slot: &SlotInput,
) -> Result<TransitionResult, TransitionError> {
    let Some(letter) = resolve_letter(slot) else {
        return Ok(TransitionResult::new(state.clone())
            .with_effect(Effect::ask(speech::UNRECOGNIZED_ANSWER)));
    };

    let index = state.current_question_index;
    let question = state.questions.get(index).ok_or_else(|| {
        TransitionError::MalformedSession(format!("no question at index {index}"))
    })?;
    let expected = *state
        .correct_option_index_by_question
        .get(index)
        .ok_or_else(|| {
            TransitionError::MalformedSession(format!("no correct option for question {index}"))
        })?;

    let mut next = state.clone();
    let mut prompt = String::new();

    if letter.index() == expected {
        next.score += 1;
        prompt.push_str(speech::CORRECT);
    } else {
        prompt.push_str(&speech::incorrect(&question.correct_answer));
    }

    next.current_question_index += 1;

    if let Some(upcoming) = next.questions.get(next.current_question_index) {
        let (options, correct) = build_options(upcoming, context.shuffler.as_ref())
            .map_err(|e| TransitionError::MalformedSession(e.to_string()))?;
        next.correct_option_index_by_question.push(correct);
        prompt.push_str(&speech::next_question(&upcoming.text, &options));
    } else {
        next.is_playing = false;
        prompt.push_str(&speech::final_score(next.score, next.questions.len()));
    }

    Ok(TransitionResult::new(next).with_effect(Effect::ask(prompt)))
}
