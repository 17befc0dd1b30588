//! HTTP request handlers for the page and API endpoints.

pub mod health;
pub mod openapi;
pub mod pages;
pub mod plan;
pub mod version;

pub use health::*;
pub use openapi::*;
pub use pages::*;
pub use plan::*;
pub use version::*;
