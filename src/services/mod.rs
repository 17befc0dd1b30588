//! Business logic and service layer modules.
//!
//! This module contains the core of the application: the persistence gateway,
//! the fixed-window rate limiter, the Gemini client adapter, and the request
//! pipeline that ties them together.

pub mod gemini;
pub mod plan;
pub mod rate_limit;
pub mod repository;

pub use gemini::*;
pub use plan::*;
pub use rate_limit::*;
pub use repository::{MySqlRequestLog, RequestLog};
