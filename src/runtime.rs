//! Runtime for executing turns
//!
//! Decodes the caller's session, drives the state machine, carries out its
//! effects and folds everything into one [`OutboundTurn`]. Nothing that goes
//! wrong inside a turn escapes it: failures become a spoken apology.

#[cfg(test)]
pub mod testing;

use crate::quiz::speech;
use crate::state_machine::{transition, Effect, Event, QuizContext, SessionState, TransitionError};
use crate::trivia::{LoggingSource, QuestionSource, TriviaApiSource};
use crate::turn::{InboundTurn, OutboundTurn};
use tracing::Instrument;

/// Type alias for production runtime with concrete implementations
pub type ProductionRuntime = QuizRuntime<LoggingSource<TriviaApiSource>>;

/// Executes turns against a question source
pub struct QuizRuntime<Q> {
    source: Q,
    context: QuizContext,
}

/// Speech and flags accumulated while a turn runs
#[derive(Default)]
struct Reply {
    prompt: String,
    reprompt: Option<String>,
    end_session: bool,
}

impl<Q: QuestionSource> QuizRuntime<Q> {
    pub fn new(source: Q, context: QuizContext) -> Self {
        Self { source, context }
    }

    /// Process one turn. Infallible: every failure is converted into a prompt.
    pub async fn handle_turn(&self, turn: InboundTurn) -> OutboundTurn {
        let span = tracing::info_span!(
            "turn",
            turn_id = %uuid::Uuid::new_v4(),
            request = %turn.request.kind()
        );
        self.run_turn(turn).instrument(span).await
    }

    async fn run_turn(&self, turn: InboundTurn) -> OutboundTurn {
        let mut state = match SessionState::from_wire(turn.session) {
            Ok(state) => state,
            Err(e) => {
                // Recovery (e.g. forcing a fresh start) is the caller's call
                tracing::warn!(error = %e, "Rejecting malformed session");
                return OutboundTurn::ask(speech::APOLOGY, None);
            }
        };

        let mut event = turn.request.into_event();
        let mut reply = Reply::default();

        loop {
            match &event {
                Event::Unhandled(intent) => tracing::info!(%intent, "No handler for intent"),
                Event::SessionEnded { reason } => tracing::info!(?reason, "Session ended"),
                _ => {}
            }

            let from = state.phase();
            let kind = event.kind();

            let result = match transition(&state, &self.context, event) {
                Ok(result) => result,
                Err(e @ TransitionError::GuardViolation { .. }) => {
                    tracing::warn!(error = %e, "Intent not valid in this phase");
                    return OutboundTurn::ask(speech::REFLECT, Some(state));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Transition failed");
                    return OutboundTurn::ask(speech::APOLOGY, Some(state));
                }
            };

            tracing::debug!(
                event = kind,
                from = from.as_str(),
                to = result.new_state.phase().as_str(),
                score = result.new_state.score,
                "Transition"
            );
            state = result.new_state;

            let mut follow_up = None;
            for effect in result.effects {
                match effect {
                    Effect::Speak { text, reprompt } => {
                        reply.prompt.push_str(&text);
                        if reprompt.is_some() {
                            reply.reprompt = reprompt;
                        }
                    }
                    Effect::EndSession => reply.end_session = true,
                    Effect::FetchQuestions { count } => {
                        follow_up = Some(match self.source.fetch_questions(count).await {
                            Ok(questions) => Event::QuestionsFetched(questions),
                            Err(e) => Event::FetchFailed(e),
                        });
                    }
                }
            }

            match follow_up {
                Some(next) => event = next,
                None => break,
            }
        }

        OutboundTurn {
            prompt_text: reply.prompt,
            reprompt_text: reply.reprompt,
            end_session: reply.end_session,
            session: Some(state),
        }
    }
}
