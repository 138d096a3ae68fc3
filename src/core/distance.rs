use crate::models::BoundingBox;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Great-circle distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculate a bounding box around a center point
///
/// Much cheaper than Haversine for pre-filtering, and a strict superset of
/// the radius circle, so a bbox check followed by an exact Haversine check
/// keeps exactly the listings inside the radius.
/// 1° latitude ≈ 111km, 1° longitude ≈ 111km * cos(latitude)
pub fn calculate_bounding_box(lat: f64, lon: f64, radius_km: f64) -> BoundingBox {
    // 1 degree latitude is approximately 111 km
    let lat_delta = radius_km / 111.0;

    // 1 degree longitude varies by latitude
    let lon_delta = radius_km / (111.0 * lat.to_radians().cos().abs());

    BoundingBox {
        min_lat: lat - lat_delta,
        max_lat: lat + lat_delta,
        min_lon: lon - lon_delta,
        max_lon: lon + lon_delta,
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(lat: f64, lon: f64, bbox: &BoundingBox) -> bool {
    lat >= bbox.min_lat && lat <= bbox.max_lat && lon >= bbox.min_lon && lon <= bbox.max_lon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Taipei Main Station to Taichung Station is approximately 130 km
        let taipei_lat = 25.0479;
        let taipei_lon = 121.5173;
        let taichung_lat = 24.1372;
        let taichung_lon = 120.6860;

        let distance = haversine_distance(taipei_lat, taipei_lon, taichung_lat, taichung_lon);
        assert!(
            (distance - 130.0).abs() < 10.0,
            "Distance should be ~130km, got {}",
            distance
        );
    }

    #[test]
    fn test_haversine_zero_for_identical_points() {
        let distance = haversine_distance(25.0479, 121.5173, 25.0479, 121.5173);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_haversine_symmetry() {
        let d_ab = haversine_distance(25.0, 121.5, 26.0, 122.5);
        let d_ba = haversine_distance(26.0, 122.5, 25.0, 121.5);
        assert!((d_ab - d_ba).abs() < 1e-9 * d_ab.max(1.0));
    }

    #[test]
    fn test_bounding_box() {
        let bbox = calculate_bounding_box(25.0479, 121.5173, 10.0);

        assert!(bbox.min_lat < 25.0479);
        assert!(bbox.max_lat > 25.0479);
        assert!(bbox.min_lon < 121.5173);
        assert!(bbox.max_lon > 121.5173);

        // Check approximate size (20km / 111km per degree = ~0.18 degrees)
        let lat_span = bbox.max_lat - bbox.min_lat;
        assert!((lat_span - 0.18).abs() < 0.02, "Lat span should be ~0.18 degrees");
    }

    #[test]
    fn test_bbox_contains_radius_circle() {
        // A point just inside the radius must also be inside the bbox.
        let bbox = calculate_bounding_box(25.0, 121.5, 5.0);
        let (lat, lon) = (25.04, 121.5); // ~4.4km due north

        assert!(haversine_distance(25.0, 121.5, lat, lon) < 5.0);
        assert!(is_within_bounding_box(lat, lon, &bbox));
    }

    #[test]
    fn test_point_within_bbox() {
        let bbox = calculate_bounding_box(25.0479, 121.5173, 10.0);

        // Center point should be within
        assert!(is_within_bounding_box(25.0479, 121.5173, &bbox));

        // Close point should be within
        assert!(is_within_bounding_box(25.05, 121.52, &bbox));

        // Far point should not be within
        assert!(!is_within_bounding_box(26.0, 122.5, &bbox));
    }
}
