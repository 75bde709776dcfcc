//! HTTP trivia provider (the-trivia-api.com v2 shape)

use super::{FetchError, QuestionRecord, QuestionSource};
use crate::quiz::MIN_INCORRECT_ANSWERS;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://the-trivia-api.com/v2/questions";

/// Question provider reached over HTTP GET
pub struct TriviaApiSource {
    client: Client,
    base_url: String,
}

impl TriviaApiSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl QuestionSource for TriviaApiSource {
    async fn fetch_questions(&self, count: usize) -> Result<Vec<QuestionRecord>, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("limit", count)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    FetchError::network(format!("Connection failed: {e}"))
                } else {
                    FetchError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::bad_status(
                status.as_u16(),
                format!("Failed with status code: {}", status.as_u16()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(format!("Failed to read response: {e}")))?;

        parse_batch(&body, count)
    }

    fn name(&self) -> &str {
        &self.base_url
    }
}

// Provider wire types; unknown fields (id, category, difficulty, ...) are ignored

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiQuestion {
    question: ApiQuestionText,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiQuestionText {
    text: String,
}

/// Parse a provider response body into exactly `count` usable records
fn parse_batch(body: &str, count: usize) -> Result<Vec<QuestionRecord>, FetchError> {
    let raw: Vec<ApiQuestion> = serde_json::from_str(body)
        .map_err(|e| FetchError::malformed(format!("Failed to parse questions: {e}")))?;

    if raw.len() != count {
        return Err(FetchError::malformed(format!(
            "Expected {count} questions, got {}",
            raw.len()
        )));
    }

    raw.into_iter()
        .enumerate()
        .map(|(i, q)| {
            if q.incorrect_answers.len() < MIN_INCORRECT_ANSWERS {
                return Err(FetchError::malformed(format!(
                    "Question {i} has {} incorrect answers, need {MIN_INCORRECT_ANSWERS}",
                    q.incorrect_answers.len()
                )));
            }
            Ok(QuestionRecord {
                text: q.question.text,
                correct_answer: q.correct_answer,
                incorrect_answers: q.incorrect_answers,
            })
        })
        .collect()
}
