//! Answer option shuffling
//!
//! Every question is presented as exactly four options: the correct answer
//! and the first three incorrect ones, in uniformly random order.

use crate::quiz::Letter;
use crate::trivia::QuestionRecord;
use rand::prelude::*;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

pub const OPTION_COUNT: usize = 4;

/// Incorrect answers needed to fill the options beside the correct one
pub const MIN_INCORRECT_ANSWERS: usize = OPTION_COUNT - 1;

/// Source of option orderings
pub trait Shuffle: Send + Sync {
    /// Permute `options` in place
    fn shuffle(&self, options: &mut [String]);
}

/// Uniform Fisher-Yates shuffling backed by a process-wide RNG.
///
/// Seeded construction makes orderings reproducible; unseeded uses system
/// entropy, so the same question does not always come out the same way.
pub struct RandomShuffle {
    rng: Mutex<StdRng>,
}

impl RandomShuffle {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Shuffle for RandomShuffle {
    fn shuffle(&self, options: &mut [String]) {
        // A poisoned RNG is still a usable RNG
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        options.shuffle(&mut *rng);
    }
}

/// Leaves options in input order: correct answer first
pub struct PreserveOrder;

impl Shuffle for PreserveOrder {
    fn shuffle(&self, _options: &mut [String]) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("question needs at least 3 incorrect answers, has {0}")]
    TooFewIncorrectAnswers(usize),
}

/// The four lettered options for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet([String; OPTION_COUNT]);

impl OptionSet {
    pub fn get(&self, letter: Letter) -> &str {
        &self.0[letter.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (letter, option)) in Letter::ALL.iter().zip(self.iter()).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{letter}: {option}")?;
        }
        Ok(())
    }
}

/// Build the shuffled option set for `question` and locate its correct answer.
///
/// The correct index is the first position whose text equals the correct
/// answer. If an incorrect answer duplicates that text, the earlier of the
/// two positions wins even when it holds the incorrect copy.
pub fn build_options(
    question: &QuestionRecord,
    shuffler: &dyn Shuffle,
) -> Result<(OptionSet, usize), OptionsError> {
    let [a, b, c, ..] = question.incorrect_answers.as_slice() else {
        return Err(OptionsError::TooFewIncorrectAnswers(
            question.incorrect_answers.len(),
        ));
    };

    let mut options = [
        question.correct_answer.clone(),
        a.clone(),
        b.clone(),
        c.clone(),
    ];
    shuffler.shuffle(&mut options);

    // The correct text is always present, so position() cannot miss
    let correct_index = options
        .iter()
        .position(|o| *o == question.correct_answer)
        .unwrap_or_default();

    Ok((OptionSet(options), correct_index))
}
