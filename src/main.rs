//! Trivia Quiz server
//!
//! Hosts the quiz turn runtime behind a small HTTP API.

use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trivia_quiz::api::{create_router, AppState};
use trivia_quiz::config::QuizConfig;
use trivia_quiz::quiz::RandomShuffle;
use trivia_quiz::runtime::{ProductionRuntime, QuizRuntime};
use trivia_quiz::state_machine::QuizContext;
use trivia_quiz::trivia::{LoggingSource, TriviaApiSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trivia_quiz=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = QuizConfig::from_env();
    tracing::info!(
        api_url = %config.trivia_api_url,
        question_count = config.question_count,
        seeded = config.shuffle_seed.is_some(),
        "Configuration loaded"
    );

    // Question source and shuffler
    let source = LoggingSource::new(TriviaApiSource::new(
        config.trivia_api_url.clone(),
        config.fetch_timeout,
    )?);
    let shuffler = Arc::new(RandomShuffle::new(config.shuffle_seed));
    let runtime: ProductionRuntime =
        QuizRuntime::new(source, QuizContext::new(shuffler, config.question_count));

    let app = create_router(AppState::new(runtime)).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Trivia quiz server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
