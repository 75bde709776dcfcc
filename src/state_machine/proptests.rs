//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across arbitrary event sequences.

use super::*;
use crate::quiz::{RandomShuffle, SlotInput};
use crate::trivia::{FetchError, QuestionRecord};
use proptest::prelude::*;
use std::sync::Arc;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context(seed: u64) -> QuizContext {
    QuizContext::new(Arc::new(RandomShuffle::new(Some(seed))), 3)
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_question() -> impl Strategy<Value = QuestionRecord> {
    (
        "[A-Za-z ]{1,20}\\?",
        "[a-z]{1,8}",
        proptest::collection::vec("[a-z]{1,8}", 3..6),
    )
        .prop_map(|(text, correct, incorrect)| QuestionRecord::new(text, correct, incorrect))
}

fn arb_batch() -> impl Strategy<Value = Vec<QuestionRecord>> {
    proptest::collection::vec(arb_question(), 1..6)
}

fn arb_slot() -> impl Strategy<Value = SlotInput> {
    prop_oneof![
        "[a-dA-D]".prop_map(SlotInput::Resolved),
        "[a-dA-D][ .!?]{0,2}".prop_map(SlotInput::Raw),
        "[a-z ]{0,10}".prop_map(SlotInput::Raw),
        Just(SlotInput::Absent),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        1 => Just(Event::Launch),
        1 => Just(Event::BeginQuiz),
        2 => arb_batch().prop_map(Event::QuestionsFetched),
        1 => Just(Event::FetchFailed(FetchError::network("timeout"))),
        1 => Just(Event::Decline),
        6 => arb_slot().prop_map(Event::SubmitAnswer),
        1 => Just(Event::Stop),
        1 => Just(Event::Fallback),
        1 => "[A-Z][a-zA-Z]{0,10}Intent".prop_map(Event::Unhandled),
    ]
}

// ============================================================================
// State Validity Checkers
// ============================================================================

fn is_answer(event: &Event) -> bool {
    matches!(event, Event::SubmitAnswer(_))
}

fn recognized(event: &Event) -> bool {
    match event {
        Event::SubmitAnswer(slot) => crate::quiz::resolve_letter(slot).is_some(),
        _ => false,
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Invariant 1: every reachable session satisfies the structural invariants
    #[test]
    fn prop_transitions_preserve_validity(
        seed in any::<u64>(),
        events in proptest::collection::vec(arb_event(), 0..30)
    ) {
        let ctx = test_context(seed);
        let mut state = SessionState::default();

        for event in events {
            if let Ok(result) = transition(&state, &ctx, event) {
                state = result.new_state;
                prop_assert!(state.validate().is_ok(), "Invalid state: {:?}", state);
                prop_assert!(state.score <= state.questions.len());
            }
        }
    }

    // Invariant 2: answers move the index by exactly one and never lower the score
    #[test]
    fn prop_answers_progress_monotonically(
        seed in any::<u64>(),
        batch in arb_batch(),
        slots in proptest::collection::vec(arb_slot(), 0..20)
    ) {
        let ctx = test_context(seed);
        let total = batch.len();
        let mut state = transition(&SessionState::offered(), &ctx, Event::QuestionsFetched(batch))
            .unwrap()
            .new_state;

        for slot in slots {
            let event = Event::SubmitAnswer(slot);
            let counts = recognized(&event);
            let before = state.clone();

            match transition(&before, &ctx, event) {
                Ok(result) => {
                    state = result.new_state;
                    prop_assert!(before.is_playing);
                    prop_assert!(state.score >= before.score);
                    prop_assert!(state.score <= before.score + 1);
                    if counts {
                        prop_assert_eq!(state.current_question_index, before.current_question_index + 1);
                    } else {
                        prop_assert_eq!(&state, &before);
                    }
                    prop_assert!(state.current_question_index <= total);
                    prop_assert_eq!(state.is_playing, state.current_question_index < total);
                }
                Err(e) => {
                    prop_assert!(!before.is_playing, "Answer rejected mid-quiz: {}", e);
                }
            }
        }
    }

    // Invariant 3: unrecognized answers leave the session untouched
    #[test]
    fn prop_unrecognized_answer_is_idempotent(
        seed in any::<u64>(),
        batch in arb_batch(),
        noise in "[e-z0-9 ]{0,12}"
    ) {
        let ctx = test_context(seed);
        let state = transition(&SessionState::offered(), &ctx, Event::QuestionsFetched(batch))
            .unwrap()
            .new_state;

        let result = transition(&state, &ctx, Event::SubmitAnswer(SlotInput::Raw(noise))).unwrap();
        prop_assert_eq!(result.new_state, state);
    }

    // Invariant 4: answering outside a quiz never mutates anything
    #[test]
    fn prop_guard_blocks_answers_when_not_playing(
        seed in any::<u64>(),
        slot in arb_slot(),
        offered in any::<bool>()
    ) {
        let ctx = test_context(seed);
        let state = if offered { SessionState::offered() } else { SessionState::default() };
        let event = Event::SubmitAnswer(slot);
        prop_assert!(is_answer(&event));

        let result = transition(&state, &ctx, event);
        let is_guard_violation = matches!(result, Err(TransitionError::GuardViolation { .. }));
        prop_assert!(is_guard_violation);
    }

    // Invariant 5: sessions survive the caller's JSON round trip unchanged
    #[test]
    fn prop_session_round_trips_through_json(
        seed in any::<u64>(),
        events in proptest::collection::vec(arb_event(), 0..15)
    ) {
        let ctx = test_context(seed);
        let mut state = SessionState::default();
        for event in events {
            if let Ok(result) = transition(&state, &ctx, event) {
                state = result.new_state;
            }
        }

        let wire = serde_json::to_value(&state).unwrap();
        prop_assert_eq!(SessionState::from_wire(Some(wire)), Ok(state));
    }

    // Invariant 6: a full quiz of correct answers scores every question
    #[test]
    fn prop_perfect_run_scores_total(seed in any::<u64>(), batch in arb_batch()) {
        let ctx = test_context(seed);
        let total = batch.len();
        let mut state = transition(&SessionState::offered(), &ctx, Event::QuestionsFetched(batch))
            .unwrap()
            .new_state;

        while state.is_playing {
            let correct = state.correct_option_index_by_question[state.current_question_index];
            let letter = crate::quiz::Letter::ALL[correct];
            let slot = SlotInput::Resolved(letter.to_string());
            state = transition(&state, &ctx, Event::SubmitAnswer(slot)).unwrap().new_state;
        }

        prop_assert_eq!(state.score, total);
        prop_assert_eq!(state.phase(), QuizPhase::Finished);
    }
}
