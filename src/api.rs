//! HTTP API for the quiz skill
//!
//! A thin hosting layer: one endpoint that runs a turn, plus version info.

mod handlers;
mod types;

pub use handlers::create_router;
pub use types::ErrorResponse;

use crate::runtime::QuizRuntime;
use std::sync::Arc;

/// Application state shared across handlers
pub struct AppState<Q> {
    pub runtime: Arc<QuizRuntime<Q>>,
}

impl<Q> AppState<Q> {
    pub fn new(runtime: QuizRuntime<Q>) -> Self {
        Self {
            runtime: Arc::new(runtime),
        }
    }
}

impl<Q> Clone for AppState<Q> {
    fn clone(&self) -> Self {
        Self {
            runtime: Arc::clone(&self.runtime),
        }
    }
}
