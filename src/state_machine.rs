//! Quiz session state machine
//!
//! Pure transitions over an explicit [`SessionState`] value: the caller
//! supplies the previous session and receives the next one plus a list of
//! effects to carry out.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{QuizContext, QuizPhase, SessionDecodeError, SessionState, DEFAULT_QUESTION_COUNT};
pub use transition::{transition, TransitionError, TransitionResult};
