use crate::models::domain::{AmenityCounts, Listing, SearchCriteria};
use serde::{Deserialize, Serialize};

/// Response for the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Rendered reply text for the user.
    pub reply: String,
    /// Structured matches backing the reply.
    pub matches: Vec<Listing>,
    /// Criteria the translator derived from the message, for transparency.
    pub criteria: Option<SearchCriteria>,
    pub total_listings: usize,
}

/// Response for the structured search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub matches: Vec<Listing>,
    pub total_listings: usize,
}

/// Response for the livability endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivabilityResponse {
    pub score: u32,
    pub reasons: Vec<String>,
    pub counts: AmenityCounts,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
