//! Trivia Quiz - turn-based logic for a voice-driven trivia quiz
//!
//! Each inbound turn carries an already-classified intent and the session
//! from the previous turn; the runtime advances the quiz and returns the
//! next prompt together with the updated session.

pub mod api;
pub mod config;
pub mod quiz;
pub mod runtime;
pub mod state_machine;
pub mod trivia;
pub mod turn;
