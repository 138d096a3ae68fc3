use crate::models::{AmenityCounts, PoiTags};

/// Category label for metro (MRT) stations
pub const MRT_STATION: &str = "mrt_station";
/// Category label for conventional rail (TRA) stations
pub const TRA_STATION: &str = "tra_station";
/// Category label for high-speed rail (HSR) stations
pub const HSR_STATION: &str = "hsr_station";

/// One transit classification rule: marker substrings and the category
/// they select.
struct TransitRule {
    markers: &'static [&'static str],
    category: &'static str,
}

/// Ordered transit rule table, first match wins.
///
/// Markers are matched by case-sensitive substring containment against the
/// element's `network` and `operator` tags. The ordering plus the marker
/// vocabularies (Chinese names of the three Taiwanese rail systems) make
/// the three transit categories mutually exclusive for any one element.
/// New categories extend the table; the control flow never changes.
const TRANSIT_RULES: [TransitRule; 3] = [
    TransitRule {
        markers: &["捷運"],
        category: MRT_STATION,
    },
    TransitRule {
        markers: &["臺灣鐵路", "台鐵"],
        category: TRA_STATION,
    },
    TransitRule {
        markers: &["台灣高速鐵路", "高鐵"],
        category: HSR_STATION,
    },
];

/// Fallback tag keys for non-transit elements, checked in priority order.
const GENERAL_TAG_KEYS: [&str; 4] = ["amenity", "shop", "leisure", "highway"];

/// Classify one raw POI element into zero or one amenity category
///
/// Transit rules are tried first against the `network` and `operator`
/// tags. An element matching none of them falls through to its first
/// non-empty descriptive tag. An element with no usable tag contributes
/// no category and is silently dropped by the caller.
pub fn classify(tags: &PoiTags) -> Option<String> {
    let network = tags.get("network").map(String::as_str).unwrap_or("");
    let operator = tags.get("operator").map(String::as_str).unwrap_or("");

    for rule in &TRANSIT_RULES {
        if rule
            .markers
            .iter()
            .any(|marker| network.contains(marker) || operator.contains(marker))
        {
            return Some(rule.category.to_string());
        }
    }

    GENERAL_TAG_KEYS
        .iter()
        .find_map(|key| tags.get(*key).filter(|v| !v.is_empty()).cloned())
}

/// Count category occurrences across a sequence of POI elements
///
/// Unclassifiable elements contribute to no category. An empty element
/// collection yields an empty count map, which is a valid result, not an
/// error.
pub fn count_categories<'a, I>(elements: I) -> AmenityCounts
where
    I: IntoIterator<Item = &'a PoiTags>,
{
    let mut counts = AmenityCounts::new();
    for tags in elements {
        if let Some(category) = classify(tags) {
            *counts.entry(category).or_insert(0) += 1;
        }
    }
    counts
}
