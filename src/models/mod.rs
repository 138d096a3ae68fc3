// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AmenityCounts, BoundingBox, FilterOutcome, Listing, LivabilityReport, PoiTags, SearchCriteria};
pub use requests::{ChatRequest, LivabilityQuery};
pub use responses::{ChatResponse, ErrorResponse, HealthResponse, LivabilityResponse, SearchResponse};
