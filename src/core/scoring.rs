use crate::core::amenity::{HSR_STATION, MRT_STATION, TRA_STATION};
use crate::models::{AmenityCounts, LivabilityReport};

/// One entry in the livability rule table
///
/// A rule looks at a single category count and contributes its points
/// when the count is nonzero. Rules never inspect another rule's
/// contribution, so the table extends by appending.
struct ScoreRule {
    category: &'static str,
    points: u32,
    rationale: &'static str,
}

/// Flat, unordered, additive rule table.
const SCORE_RULES: [ScoreRule; 3] = [
    ScoreRule {
        category: MRT_STATION,
        points: 1,
        rationale: "Transit: near an MRT station",
    },
    ScoreRule {
        category: TRA_STATION,
        points: 1,
        rationale: "Transit: near a TRA station",
    },
    ScoreRule {
        category: HSR_STATION,
        points: 1,
        rationale: "Transit: near an HSR station",
    },
];

/// Score an amenity count vector against the livability rule table
///
/// Each fired rule adds its points and one rationale line. The score is
/// recomputed per call and never cached.
pub fn livability_score(counts: &AmenityCounts) -> LivabilityReport {
    let mut score = 0;
    let mut reasons = Vec::new();

    for rule in &SCORE_RULES {
        if counts.get(rule.category).copied().unwrap_or(0) > 0 {
            score += rule.points;
            reasons.push(rule.rationale.to_string());
        }
    }

    LivabilityReport { score, reasons }
}
