//! Utility functions and helpers.

pub mod html;

pub use html::*;
