use crate::core::{
    distance::calculate_bounding_box,
    filters::{has_excluded_label, has_required_labels, matches_conditions, within_radius},
};
use crate::models::{FilterOutcome, Listing, SearchCriteria};

/// Default number of listings returned per query
pub const DEFAULT_RESULT_CAP: usize = 10;

/// Listing filter engine - reduces a listing collection to the subset
/// satisfying a [`SearchCriteria`]
///
/// # Pipeline Stages
/// 1. Geospatial radius filter (bounding box pre-check + Haversine)
/// 2. Price / age / size condition filters
/// 3. Label exclusion (any overlap disqualifies)
/// 4. Label inclusion (all required labels must be present)
/// 5. Truncation to the result cap, preserving source order
///
/// Each stage is an independent predicate: stage order affects only how
/// much work later stages see, never which listings survive. Absent
/// criteria fields skip their stage entirely. The engine is pure and
/// idempotent; identical inputs always produce identical outputs.
#[derive(Debug, Clone, Copy)]
pub struct ListingFilter {
    result_cap: usize,
}

impl ListingFilter {
    pub fn new(result_cap: usize) -> Self {
        Self { result_cap }
    }

    pub fn result_cap(&self) -> usize {
        self.result_cap
    }

    /// Filter a listing collection by the given criteria
    ///
    /// Returns at most `result_cap` listings in the collection's original
    /// order. No ranking is applied beyond source order. An empty
    /// collection yields an empty result regardless of criteria; a fully
    /// unconstrained criteria object yields the first `result_cap`
    /// listings unchanged.
    pub fn filter(&self, listings: &[Listing], criteria: &SearchCriteria) -> FilterOutcome {
        let total_listings = listings.len();

        // Radius stage applies only when both halves are present.
        let radius_stage = match (criteria.location, criteria.distance) {
            (Some((lat, lon)), Some(radius_km)) => {
                Some((lat, lon, radius_km, calculate_bounding_box(lat, lon, radius_km)))
            }
            _ => None,
        };

        let exclude = criteria.labels_to_exclude.as_deref().unwrap_or(&[]);
        let include = criteria.labels_to_include.as_deref().unwrap_or(&[]);

        let matches: Vec<Listing> = listings
            .iter()
            .filter(|listing| match &radius_stage {
                Some((lat, lon, radius_km, bbox)) => {
                    within_radius(listing, *lat, *lon, *radius_km, bbox)
                }
                None => true,
            })
            .filter(|listing| {
                matches_conditions(
                    listing,
                    criteria.price.as_deref(),
                    criteria.age.as_deref(),
                    criteria.size.as_deref(),
                )
            })
            .filter(|listing| exclude.is_empty() || !has_excluded_label(listing, exclude))
            .filter(|listing| include.is_empty() || has_required_labels(listing, include))
            .take(self.result_cap)
            .cloned()
            .collect();

        FilterOutcome {
            matches,
            total_listings,
        }
    }
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_CAP)
    }
}
