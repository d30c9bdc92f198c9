use std::sync::Arc;

use dotenvy::dotenv;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::level_filters;
use tracing_subscriber::fmt::format::FmtSpan;

use quesai_bot::config::Config;
use quesai_bot::gemini::GeminiClient;
use quesai_bot::schema::schema;
use quesai_bot::state::SessionState;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let rust_log = std::env::var("LOG_LEVEL").unwrap_or("error".into());
    tracing_subscriber::fmt()
        .with_max_level(level_filters::LevelFilter::from_level(
            rust_log.parse().unwrap(),
        ))
        .json()
        .with_span_events(FmtSpan::ENTER)
        .log_internal_errors(true)
        .with_ansi(true)
        .with_line_number(true)
        .with_target(false)
        .init();

    let config = Config::from_env();
    let gateway = Arc::new(GeminiClient::new(
        config.gemini_api_url.clone(),
        config.gemini_api_key.clone(),
    ));

    let bot = Bot::new(config.teloxide_token.clone());
    log::info!("Starting QuesAI bot...");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![InMemStorage::<SessionState>::new(), gateway])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await
}
