//! Mock implementations for testing
//!
//! These mocks enable turn-level testing without network I/O.

use crate::trivia::{FetchError, QuestionRecord, QuestionSource};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock question source that returns queued batches
pub struct MockQuestionSource {
    responses: Mutex<VecDeque<Result<Vec<QuestionRecord>, FetchError>>>,
    /// Record of every requested count
    pub counts: Mutex<Vec<usize>>,
}

impl MockQuestionSource {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            counts: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful batch
    pub fn queue_questions(&self, questions: Vec<QuestionRecord>) {
        self.responses.lock().unwrap().push_back(Ok(questions));
    }

    /// Queue a failure
    pub fn queue_error(&self, error: FetchError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded request counts
    pub fn recorded_counts(&self) -> Vec<usize> {
        self.counts.lock().unwrap().clone()
    }
}

impl Default for MockQuestionSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionSource for MockQuestionSource {
    async fn fetch_questions(&self, count: usize) -> Result<Vec<QuestionRecord>, FetchError> {
        self.counts.lock().unwrap().push(count);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::network("No mock response queued")))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_question_source() {
        let mock = MockQuestionSource::new();
        mock.queue_questions(vec![QuestionRecord::new("Q", "A", ["B", "C", "D"])]);

        let batch = mock.fetch_questions(1).await.unwrap();
        assert_eq!(batch.len(), 1);

        // Queue drained
        assert!(mock.fetch_questions(1).await.is_err());
        assert_eq!(mock.recorded_counts(), vec![1, 1]);
    }
}
