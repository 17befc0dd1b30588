//! Custom middleware for cross-cutting concerns.

pub mod request_id;

pub use request_id::*;
