use crate::models::SearchCriteria;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when translating a requirement
#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Model output contained no criteria object")]
    NoCriteria,
}

/// Natural-language-to-criteria translator
///
/// Thin client over an OpenAI-compatible chat-completions endpoint. The
/// model is asked to reduce a free-form housing requirement to the
/// structured `SearchCriteria` JSON; anything it leaves null stays
/// unconstrained. The filter engine tolerates any subset of fields, so a
/// partially filled object is a normal outcome here, not a failure.
pub struct TranslatorClient {
    endpoint: String,
    model: String,
    api_token: String,
    client: Client,
}

impl TranslatorClient {
    /// Create a new translator client
    pub fn new(endpoint: String, model: String, api_token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            model,
            api_token,
            client,
        }
    }

    /// Translate a free-form requirement into search criteria
    pub async fn parse_requirement(
        &self,
        requirement: &str,
    ) -> Result<SearchCriteria, TranslatorError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let body = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": build_prompt(requirement) }],
            "max_tokens": 500,
            // Low temperature for stable JSON output
            "temperature": 0.1,
        });

        tracing::debug!("Requesting criteria translation from: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslatorError::ApiError(format!(
                "Translation request failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let content = json
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                TranslatorError::InvalidResponse("Missing choices[0].message.content".into())
            })?;

        let object = extract_json_object(content).ok_or(TranslatorError::NoCriteria)?;

        serde_json::from_str(object).map_err(|e| {
            TranslatorError::InvalidResponse(format!("Failed to parse criteria: {}", e))
        })
    }
}

/// Build the criteria-extraction prompt for one user requirement
fn build_prompt(requirement: &str) -> String {
    format!(
        r#"Please help me convert the user's requirement: "{requirement}" into a structured JSON format.
The JSON should contain these keys: [location, distance, age, size, price, labels_to_exclude, labels_to_include].

- 'location': A tuple (latitude, longitude) for the central point of search (e.g., a specific MRT station).
- 'distance': A number in kilometers for the search radius. Assume 10 minutes of commute time equals 1 km.
- 'age': A SQL-like condition for the house's age (e.g., "age <= 10").
- 'size': A SQL-like condition for the house's size in square meters (e.g., "size >= 30").
- 'price': A SQL-like condition for the house's price in NT dollars (e.g., "price <= 24000000").
- 'labels_to_exclude': A list of strings for labels to exclude (e.g., ["temple", "funeral_home"]).
- 'labels_to_include': A list of strings for labels that must be included (e.g., ["hospital", "MRT station"]).

Please answer with only the JSON object, without any additional text or markdown.
If a field is not specified, set its value to null.
"#
    )
}

/// Cut the outermost `{...}` span out of model output
///
/// Models wrap the JSON in prose or code fences often enough that taking
/// the first `{` through the last `}` is the reliable extraction.
fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&content[start..=end])
}
