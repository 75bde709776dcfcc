//! Spoken prompt text

use super::OptionSet;

pub const WELCOME: &str =
    "Welcome to the quiz game, I will ask you some questions. Ready to start?";
pub const DECLINE: &str = "Ok, we'll play another time. Goodbye!";
pub const UNRECOGNIZED_ANSWER: &str = "Please choose one of the options!";
pub const CORRECT: &str = "That's correct! ";
pub const GOODBYE: &str = "Goodbye!";
pub const FALLBACK: &str = "Sorry, I don't know about that. Please try again.";
pub const REFLECT: &str = "Please respond correctly";
pub const APOLOGY: &str = "Sorry, I had trouble doing what you asked. Please try again.";

pub fn first_question(text: &str, options: &OptionSet) -> String {
    format!("Great! Here is the first question. {text} Your options are: {options}")
}

pub fn next_question(text: &str, options: &OptionSet) -> String {
    format!("Here is your next question. {text} Your options are: {options}")
}

pub fn incorrect(correct_answer: &str) -> String {
    format!("The correct answer is {correct_answer}! ")
}

pub fn final_score(score: usize, total: usize) -> String {
    format!("That is all! You scored {score} out of {total}. Would you like to play again?")
}
