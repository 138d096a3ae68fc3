use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single housing record with location, numeric attributes, and labels.
///
/// Listings are owned by the external dataset; the filter engine treats
/// them as read-only and never mutates or persists them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Price in integer currency units (NT dollars in the stock dataset).
    pub price: i64,
    /// Building age in years.
    pub age: u32,
    /// Floor area in the dataset's area units.
    pub size: f64,
    #[serde(default)]
    pub bedroom: u8,
    #[serde(default)]
    pub living_room: u8,
    #[serde(default)]
    pub bathroom: u8,
    #[serde(default)]
    pub link: String,
    /// Descriptive tags such as "temple" or "hospital".
    #[serde(default)]
    pub label: Vec<String>,
}

/// Structured constraints derived from a user's natural-language request.
///
/// Every field is optional: the upstream translator may legitimately
/// populate any subset, and an absent field means "no constraint" — which
/// is distinct from an empty list or a zero value. A criteria object is
/// built once per query, consumed once by the filter engine, then dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Center of the search as (latitude, longitude) in degrees.
    #[serde(default)]
    pub location: Option<(f64, f64)>,
    /// Search radius in kilometers, paired with `location`.
    #[serde(default)]
    pub distance: Option<f64>,
    /// Condition string over the listing age, e.g. "age <= 10".
    #[serde(default)]
    pub age: Option<String>,
    /// Condition string over the listing size, e.g. "size >= 30".
    #[serde(default)]
    pub size: Option<String>,
    /// Condition string over the listing price, e.g. "price <= 24000000".
    #[serde(default)]
    pub price: Option<String>,
    /// Labels that disqualify a listing on any overlap.
    #[serde(default)]
    pub labels_to_exclude: Option<Vec<String>>,
    /// Labels that must all be present on a listing.
    #[serde(default)]
    pub labels_to_include: Option<Vec<String>>,
}

impl SearchCriteria {
    /// True when no field carries a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.location.is_none()
            && self.distance.is_none()
            && self.age.is_none()
            && self.size.is_none()
            && self.price.is_none()
            && self.labels_to_exclude.is_none()
            && self.labels_to_include.is_none()
    }
}

/// Raw tag set of one POI element as returned by the geospatial source.
pub type PoiTags = HashMap<String, String>;

/// Occurrence count per amenity category, built fresh per query.
pub type AmenityCounts = HashMap<String, u32>;

/// Result of scoring an amenity count vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivabilityReport {
    /// Additive non-negative score from the rule table.
    pub score: u32,
    /// One human-readable line per fired rule.
    pub reasons: Vec<String>,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Result of running the filter pipeline over a listing collection.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Matching listings in source order, truncated to the result cap.
    pub matches: Vec<Listing>,
    /// Size of the collection before filtering.
    pub total_listings: usize,
}
