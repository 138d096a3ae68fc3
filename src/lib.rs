//! Haus Algo - Listing search and livability scoring service for the Haus
//! housing assistant
//!
//! This library provides two pure engines: a sequential filter pipeline
//! that reduces a listing collection to the subset satisfying a structured
//! search criteria object, and an amenity classifier plus additive rule
//! table that turns raw points of interest into a livability score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    amenity::{classify, count_categories},
    condition::{satisfies, ConditionExpr},
    distance::haversine_distance,
    engine::ListingFilter,
    scoring::livability_score,
};
pub use crate::models::{
    AmenityCounts, FilterOutcome, Listing, LivabilityReport, PoiTags, SearchCriteria,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let distance = haversine_distance(25.0479, 121.5173, 25.0479, 121.5173);
        assert_eq!(distance, 0.0);
        assert!(satisfies(1.0, None));
    }
}
