//! Request and response models for the HTTP surface.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Form fields posted from the input page
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct PlanForm {
    /// Selected destination (e.g., "東京都")
    pub prefecture: Option<String>,
    /// Selected trip length in days (e.g., "3")
    pub day: Option<String>,
}

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}
