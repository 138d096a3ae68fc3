use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to search listings from a natural-language requirement
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1))]
    pub message: String,
}

/// Query parameters for the livability endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LivabilityQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
    /// Search radius in meters; the configured default applies when absent.
    #[serde(default)]
    pub radius_m: Option<u32>,
}
