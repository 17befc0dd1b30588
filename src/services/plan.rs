//! Travel-plan request pipeline: log, rate-check, then call Gemini.

use crate::config::ApiSettings;
use crate::services::gemini::{GeminiClient, GeminiError};
use crate::services::rate_limit::FixedWindowLimiter;
use crate::services::repository::RequestLog;
use thiserror::Error;
use tracing::info;

/// User-facing message rendered for any pipeline failure
pub const FAILURE_MESSAGE: &str = "API実行に失敗しました。時間をおいて再実行してください。";

/// Failure causes of the request pipeline
///
/// The result page shows the same retry message for every variant; the
/// distinction only exists for logging.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("request count exceeded the trailing-window limit")]
    RateLimited,
    #[error(transparent)]
    Api(#[from] GeminiError),
}

/// Build the fixed-template prompt from the two form selections
pub fn build_prompt(prefecture: &str, day: &str) -> String {
    format!("{prefecture}へ{day}日間旅行するプランを提案してください。")
}

/// Run the request pipeline for one accepted submission
///
/// Sequence: persist the prompt, check the trailing-window count, call the
/// Gemini adapter. The record is inserted before the rate check, so every
/// accepted submission leaves exactly one row even when the AI call never
/// happens.
pub async fn request_travel_plan(
    log: &impl RequestLog,
    api: &ApiSettings,
    limiter: &FixedWindowLimiter,
    prompt: &str,
) -> Result<String, PlanError> {
    info!("travel plan request pipeline started");

    log.insert_request(prompt).await?;

    if !limiter.check(log).await? {
        return Err(PlanError::RateLimited);
    }

    let client = GeminiClient::new(api);
    let text = client.generate_content(prompt).await?;

    info!("travel plan request pipeline finished");
    Ok(text)
}
