//! Quiz building blocks: option shuffling, answer resolution, prompt text

mod resolver;
mod shuffle;
pub mod speech;

pub use resolver::{resolve_letter, Letter, SlotInput};
pub use shuffle::{
    build_options, OptionSet, OptionsError, PreserveOrder, RandomShuffle, Shuffle, MIN_INCORRECT_ANSWERS,
    OPTION_COUNT,
};
