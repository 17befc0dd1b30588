//! Travel-plan submission handler.

use crate::{
    config::Settings,
    handlers::pages::{DAY_PLACEHOLDER, PREFECTURE_PLACEHOLDER, input_form_response, result_page_response},
    models::PlanForm,
    services::plan::{FAILURE_MESSAGE, build_prompt, request_travel_plan},
    services::rate_limit::FixedWindowLimiter,
    services::repository::MySqlRequestLog,
};
use actix_web::{HttpRequest, HttpResponse, web};
use paperclip::actix::api_v2_operation;

/// Travel-plan submission endpoint
///
/// Validates the two form selections, builds the prompt, runs the pipeline
/// (log, rate check, Gemini call), and renders the result page. Missing or
/// placeholder-valued fields re-render the input form without side effects.
/// Both success and failure render with HTTP 200; any pipeline failure shows
/// the same retry message.
#[api_v2_operation(
    summary = "Travel Plan Request Endpoint",
    description = "Processes the posted form, forwards the generated prompt to the Gemini API, and renders the suggested plan or a fixed retry message.",
    tags("Pages"),
    responses(
        (status = 200, description = "Result page or re-rendered input form")
    )
)]
pub async fn submit_plan(req: HttpRequest, form: web::Form<PlanForm>) -> HttpResponse {
    tracing::info!("travel plan request received");

    let form = form.into_inner();
    let (Some(prefecture), Some(day)) = (form.prefecture, form.day) else {
        tracing::info!("rendering input page (missing selection)");
        return input_form_response();
    };

    if prefecture == PREFECTURE_PLACEHOLDER || day == DAY_PLACEHOLDER {
        tracing::info!("rendering input page (placeholder selection)");
        return input_form_response();
    }

    let prompt = build_prompt(&prefecture, &day);
    tracing::info!(prompt = %prompt, "request prompt built");

    // Settings and limiter are registered as app data by the app factory.
    let (Some(settings), Some(limiter)) = (
        req.app_data::<web::Data<Settings>>(),
        req.app_data::<web::Data<FixedWindowLimiter>>(),
    ) else {
        tracing::error!("application state missing settings or rate limiter");
        return result_page_response(FAILURE_MESSAGE);
    };

    let log = MySqlRequestLog::new(settings.db.clone());
    match request_travel_plan(&log, &settings.api, limiter.get_ref(), &prompt).await {
        Ok(text) => {
            tracing::info!("rendering result page");
            result_page_response(&text)
        }
        Err(e) => {
            tracing::error!(error = %e, "travel plan pipeline failed");
            result_page_response(FAILURE_MESSAGE)
        }
    }
}
