//! OpenAPI specification generation and app factory.

use crate::{
    config::{RateLimitConfig, Settings},
    handlers::{health, input_page, submit_plan, version},
    middleware::RequestIdMiddleware,
    services::rate_limit::FixedWindowLimiter,
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Travelplan API".into(),
            version: "1.0.0".into(),
            description: Some(
                "A travel-plan suggestion web app backed by the Gemini API.\n\n\
                `GET /` renders the input form; `POST /result` forwards the selected \
                destination and trip length to Gemini, logs the request to MySQL, and \
                renders the suggested plan. Submissions are counted against a fixed \
                60-per-minute window; any pipeline failure renders a single retry message \
                with HTTP 200."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application with shared configuration
///
/// This factory function wires the page and API routes, the request-ID
/// middleware, and the shared state (settings, rate-limit config, limiter).
/// It is used both by the binary and by the integration tests.
pub fn create_base_app(
    settings: Settings,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let limiter = FixedWindowLimiter::new(RateLimitConfig::from_env());

    App::new()
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(settings))
        .app_data(web::Data::new(limiter))
        .service(web::resource("/").route(web::get().to(input_page)))
        .service(
            web::resource("/result")
                .route(web::post().to(submit_plan))
                .route(web::get().to(input_page)),
        )
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
