//! Server configuration from the environment

use crate::state_machine::DEFAULT_QUESTION_COUNT;
use crate::trivia::DEFAULT_API_URL;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the quiz server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub port: u16,
    pub trivia_api_url: String,
    pub question_count: usize,
    pub fetch_timeout: Duration,
    /// Fixed shuffle seed; `None` shuffles from system entropy
    pub shuffle_seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            trivia_api_url: DEFAULT_API_URL.to_string(),
            question_count: DEFAULT_QUESTION_COUNT,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            shuffle_seed: None,
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            port: parse_or("TRIVIA_PORT", &lookup, defaults.port),
            trivia_api_url: lookup("TRIVIA_API_URL").unwrap_or(defaults.trivia_api_url),
            question_count: match parse_or("TRIVIA_QUESTION_COUNT", &lookup, defaults.question_count) {
                0 => {
                    tracing::warn!("TRIVIA_QUESTION_COUNT must be positive, using default");
                    defaults.question_count
                }
                n => n,
            },
            fetch_timeout: match parse_or(
                "TRIVIA_FETCH_TIMEOUT_SECS",
                &lookup,
                defaults.fetch_timeout.as_secs(),
            ) {
                0 => {
                    tracing::warn!("TRIVIA_FETCH_TIMEOUT_SECS must be positive, using default");
                    defaults.fetch_timeout
                }
                secs => Duration::from_secs(secs),
            },
            shuffle_seed: lookup("TRIVIA_SHUFFLE_SEED").and_then(|raw| match raw.parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    tracing::warn!(value = %raw, "Ignoring unparseable TRIVIA_SHUFFLE_SEED");
                    None
                }
            }),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Unparseable value, using default");
            default
        }),
        None => default,
    }
}
