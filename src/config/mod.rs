//! Configuration structures and loading utilities.
//!
//! Static settings (API key, model name, database credentials) come from an
//! ini-style config file read once at startup; the rate-limit knobs fall back
//! to environment variables.

pub mod rate_limit;
pub mod settings;

pub use rate_limit::*;
pub use settings::*;
