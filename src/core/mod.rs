// Core algorithm exports
pub mod amenity;
pub mod condition;
pub mod distance;
pub mod engine;
pub mod filters;
pub mod scoring;

pub use amenity::{classify, count_categories};
pub use condition::{satisfies, CompareOp, ConditionExpr, ConditionParseError};
pub use distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box};
pub use engine::{ListingFilter, DEFAULT_RESULT_CAP};
pub use scoring::livability_score;
