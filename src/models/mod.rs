//! Data structures and request/response models.

pub mod api;

pub use api::*;
