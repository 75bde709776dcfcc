//! Trivia question source
//!
//! Fetches the batch of questions a quiz is played with. The core only sees
//! the [`QuestionSource`] trait; [`TriviaApiSource`] is the HTTP provider.

mod error;
mod http;

pub use error::{FetchError, FetchErrorKind};
pub use http::{TriviaApiSource, DEFAULT_API_URL};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single multiple-choice question, immutable once fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl QuestionRecord {
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers: incorrect_answers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Provider of question batches
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch exactly `count` questions, or fail
    async fn fetch_questions(&self, count: usize) -> Result<Vec<QuestionRecord>, FetchError>;

    /// Human-readable provider name, for logs
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: QuestionSource + ?Sized> QuestionSource for Arc<T> {
    async fn fetch_questions(&self, count: usize) -> Result<Vec<QuestionRecord>, FetchError> {
        (**self).fetch_questions(count).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Logging wrapper for question sources
pub struct LoggingSource<S> {
    inner: S,
}

impl<S: QuestionSource> LoggingSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: QuestionSource> QuestionSource for LoggingSource<S> {
    async fn fetch_questions(&self, count: usize) -> Result<Vec<QuestionRecord>, FetchError> {
        let start = std::time::Instant::now();
        let result = self.inner.fetch_questions(count).await;
        let duration = start.elapsed();

        match &result {
            Ok(questions) => {
                tracing::info!(
                    source = %self.inner.name(),
                    duration_ms = %duration.as_millis(),
                    count = questions.len(),
                    "Question fetch completed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    source = %self.inner.name(),
                    duration_ms = %duration.as_millis(),
                    kind = e.kind.as_str(),
                    error = %e.message,
                    "Question fetch failed"
                );
            }
        }

        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
