//! Travelplan API - a travel-plan suggestion web app backed by Gemini
//!
//! A small Actix Web application that:
//! - Renders a destination / trip-length input form
//! - Logs every accepted request to a MySQL table
//! - Enforces a fixed-window rate limit by counting recent request rows
//! - Forwards a fixed-template prompt to the Gemini generative-text API
//! - Renders the returned plan, or a single retry message on any failure
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Data structures and request/response models
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `middleware/` - Custom middleware for cross-cutting concerns
//! - `services/` - Persistence gateway, rate limiter, Gemini adapter, pipeline
//! - `utils/` - Utility functions and helpers
//! - `config/` - Configuration structures and file/environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use travelplan_api::{Settings, create_base_app};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let settings = Settings::load().map_err(std::io::Error::other)?;
//!     let app = create_base_app(settings);
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types and functions for convenience
pub use config::{ApiSettings, DbSettings, RateLimitConfig, Settings, SettingsError};
pub use handlers::{
    create_base_app, create_openapi_spec, health, input_page, submit_plan, version,
};
pub use middleware::RequestIdMiddleware;
pub use models::{HealthResponse, PlanForm, VersionResponse};
pub use services::{
    FAILURE_MESSAGE, FixedWindowLimiter, GeminiClient, GeminiError, MySqlRequestLog, PlanError,
    RequestLog, build_prompt, request_travel_plan,
};
pub use utils::{escape_html, escape_html_multiline};
