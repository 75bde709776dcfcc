//! Spoken answer resolution
//!
//! Turns the answer slot of an inbound turn into one of the four option
//! letters.

use std::fmt;

/// Option letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

    /// Position in the option set: a=0 .. d=3
    pub fn index(self) -> usize {
        match self {
            Letter::A => 0,
            Letter::B => 1,
            Letter::C => 2,
            Letter::D => 3,
        }
    }

    /// Parse a bare letter, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "a" => Some(Letter::A),
            "b" => Some(Letter::B),
            "c" => Some(Letter::C),
            "d" => Some(Letter::D),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
        };
        f.write_str(s)
    }
}

/// Answer slot as delivered by the voice platform, normalised once at the
/// turn boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotInput {
    /// Canonical value from slot resolution (synonym already mapped)
    Resolved(String),
    /// Whatever the recogniser heard
    Raw(String),
    Absent,
}

impl SlotInput {
    /// Prefer a non-empty resolved name, then non-empty raw text
    pub fn from_parts(resolved_name: Option<String>, raw_text: Option<String>) -> Self {
        match (resolved_name, raw_text) {
            (Some(name), _) if !name.is_empty() => SlotInput::Resolved(name),
            (_, Some(text)) if !text.is_empty() => SlotInput::Raw(text),
            _ => SlotInput::Absent,
        }
    }
}

/// Resolve a slot to a letter; `None` means unrecognized.
///
/// A resolved name is authoritative: when present, raw text is not consulted.
/// Raw text is lower-cased and stripped of everything but ASCII letters, and
/// must then be exactly one of `a`..`d`.
pub fn resolve_letter(input: &SlotInput) -> Option<Letter> {
    match input {
        SlotInput::Resolved(name) => Letter::from_name(name),
        SlotInput::Raw(text) => {
            let stripped: String = text
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_lowercase())
                .collect();
            Letter::from_name(&stripped)
        }
        SlotInput::Absent => None,
    }
}
