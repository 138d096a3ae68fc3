use crate::core::condition::satisfies;
use crate::core::distance::{haversine_distance, is_within_bounding_box};
use crate::models::{BoundingBox, Listing};

/// Check if a listing lies within a radius of a center point
///
/// The bounding box is a cheap pre-check; the Haversine distance is the
/// authoritative test.
#[inline]
pub fn within_radius(
    listing: &Listing,
    center_lat: f64,
    center_lon: f64,
    radius_km: f64,
    bbox: &BoundingBox,
) -> bool {
    if !is_within_bounding_box(listing.latitude, listing.longitude, bbox) {
        return false;
    }

    haversine_distance(center_lat, center_lon, listing.latitude, listing.longitude) <= radius_km
}

/// Check the listing's numeric attributes against optional condition strings
///
/// Each absent condition is an identity filter; malformed conditions are
/// ignored by the fail-open condition evaluator.
#[inline]
pub fn matches_conditions(
    listing: &Listing,
    price: Option<&str>,
    age: Option<&str>,
    size: Option<&str>,
) -> bool {
    satisfies(listing.price as f64, price)
        && satisfies(listing.age as f64, age)
        && satisfies(listing.size, size)
}

/// True when the listing carries any of the excluded labels
#[inline]
pub fn has_excluded_label(listing: &Listing, exclude: &[String]) -> bool {
    listing.label.iter().any(|l| exclude.contains(l))
}

/// True when the listing carries every required label
#[inline]
pub fn has_required_labels(listing: &Listing, include: &[String]) -> bool {
    include.iter().all(|l| listing.label.contains(l))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distance::calculate_bounding_box;

    fn create_test_listing(labels: &[&str]) -> Listing {
        Listing {
            name: "Test Home".to_string(),
            address: "1 Test Road".to_string(),
            latitude: 25.0479,
            longitude: 121.5173,
            price: 20_000_000,
            age: 5,
            size: 30.0,
            bedroom: 3,
            living_room: 2,
            bathroom: 2,
            link: "https://example.com/1".to_string(),
            label: labels.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_within_radius() {
        let listing = create_test_listing(&[]);
        let bbox = calculate_bounding_box(25.0479, 121.5173, 1.0);

        assert!(within_radius(&listing, 25.0479, 121.5173, 1.0, &bbox));
    }

    #[test]
    fn test_outside_radius() {
        let listing = create_test_listing(&[]);
        // Center ~90km away in Hsinchu
        let bbox = calculate_bounding_box(24.8066, 120.9686, 10.0);

        assert!(!within_radius(&listing, 24.8066, 120.9686, 10.0, &bbox));
    }

    #[test]
    fn test_matches_conditions() {
        let listing = create_test_listing(&[]);

        assert!(matches_conditions(&listing, Some("price <= 25000000"), None, None));
        assert!(!matches_conditions(&listing, Some("price <= 15000000"), None, None));
        assert!(matches_conditions(&listing, None, Some("age <= 10"), Some("size >= 30")));
        assert!(!matches_conditions(&listing, None, None, Some("size >= 40")));
    }

    #[test]
    fn test_malformed_condition_is_identity() {
        let listing = create_test_listing(&[]);
        assert!(matches_conditions(&listing, Some("price ~~ 1"), None, None));
    }

    #[test]
    fn test_excluded_label_any_overlap() {
        let tainted = create_test_listing(&["temple", "park"]);
        let clean = create_test_listing(&["park"]);
        let exclude = vec!["temple".to_string()];

        assert!(has_excluded_label(&tainted, &exclude));
        assert!(!has_excluded_label(&clean, &exclude));
    }

    #[test]
    fn test_required_labels_superset() {
        let full = create_test_listing(&["hospital", "MRT station", "park"]);
        let partial = create_test_listing(&["hospital"]);
        let include = vec!["hospital".to_string(), "MRT station".to_string()];

        assert!(has_required_labels(&full, &include));
        assert!(!has_required_labels(&partial, &include));
    }
}
