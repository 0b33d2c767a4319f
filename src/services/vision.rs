use crate::models::{DominantColor, Label, Rgb};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the vision provider
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Structured output of one annotate call
#[derive(Debug, Clone, Default)]
pub struct VisionObservations {
    pub labels: Vec<Label>,
    pub dominant_colors: Vec<DominantColor>,
}

/// Vision provider API client
///
/// Wraps the `images:annotate` endpoint (label detection plus image
/// properties). Constructed once at startup and shared through application
/// state; the classifier itself never touches this.
pub struct VisionClient {
    base_url: String,
    api_key: String,
    client: Client,
    max_labels: u32,
}

impl VisionClient {
    pub fn new(base_url: String, api_key: String, timeout_secs: u64, max_labels: u32) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
            max_labels,
        }
    }

    /// Annotate a base64-encoded image
    pub async fn annotate(&self, image_base64: &str) -> Result<VisionObservations, VisionError> {
        let url = format!(
            "{}/v1/images:annotate?key={}",
            self.base_url.trim_end_matches('/'),
            self.api_key
        );

        let payload = json!({
            "requests": [{
                "image": { "content": image_base64 },
                "features": [
                    { "type": "LABEL_DETECTION", "maxResults": self.max_labels },
                    { "type": "IMAGE_PROPERTIES" }
                ]
            }]
        });

        tracing::debug!("Sending annotate request ({} label cap)", self.max_labels);

        let response = self.client.post(&url).json(&payload).send().await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            || response.status() == reqwest::StatusCode::FORBIDDEN
        {
            return Err(VisionError::Unauthorized);
        }

        if !response.status().is_success() {
            return Err(VisionError::ApiError(format!(
                "Annotate failed: {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        parse_annotate_response(&body)
    }
}

/// Extract labels and dominant colors from the provider's response shape
fn parse_annotate_response(body: &Value) -> Result<VisionObservations, VisionError> {
    let first = body
        .get("responses")
        .and_then(|r| r.as_array())
        .and_then(|r| r.first())
        .ok_or_else(|| VisionError::InvalidResponse("Missing responses array".into()))?;

    if let Some(err) = first.get("error") {
        let message = err
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown provider error");
        return Err(VisionError::ApiError(message.to_string()));
    }

    let labels = first
        .get("labelAnnotations")
        .and_then(|l| l.as_array())
        .map(|annotations| {
            annotations
                .iter()
                .map(|a| Label {
                    // A missing description degrades to empty, never an error
                    description: a
                        .get("description")
                        .and_then(|d| d.as_str())
                        .unwrap_or("")
                        .to_string(),
                    score: a.get("score").and_then(|s| s.as_f64()).unwrap_or(0.0),
                })
                .collect()
        })
        .unwrap_or_default();

    let dominant_colors = first
        .get("imagePropertiesAnnotation")
        .and_then(|p| p.get("dominantColors"))
        .and_then(|d| d.get("colors"))
        .and_then(|c| c.as_array())
        .map(|colors| {
            colors
                .iter()
                .map(|c| DominantColor {
                    color: Rgb {
                        red: channel(c, "red"),
                        green: channel(c, "green"),
                        blue: channel(c, "blue"),
                    },
                    score: c.get("score").and_then(|s| s.as_f64()).unwrap_or(0.0),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(VisionObservations {
        labels,
        dominant_colors,
    })
}

fn channel(color: &Value, name: &str) -> u8 {
    color
        .get("color")
        .and_then(|c| c.get(name))
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
        .clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_annotate_parses_labels_and_colors() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/images:annotate?key=test_key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "responses": [{
                        "labelAnnotations": [
                            {"description": "Afro", "score": 0.93},
                            {"score": 0.5}
                        ],
                        "imagePropertiesAnnotation": {
                            "dominantColors": {
                                "colors": [
                                    {"color": {"red": 210, "green": 170, "blue": 80}, "score": 0.31}
                                ]
                            }
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let client = VisionClient::new(server.url(), "test_key".to_string(), 5, 20);
        let observations = client.annotate("aGVsbG8=").await.unwrap();

        mock.assert_async().await;
        assert_eq!(observations.labels.len(), 2);
        assert_eq!(observations.labels[0].description, "Afro");
        assert_eq!(observations.labels[1].description, "");
        assert_eq!(observations.dominant_colors.len(), 1);
        assert_eq!(observations.dominant_colors[0].color.red, 210);
    }

    #[tokio::test]
    async fn test_annotate_surfaces_provider_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/images:annotate?key=test_key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"responses": [{"error": {"message": "image too large"}}]}"#)
            .create_async()
            .await;

        let client = VisionClient::new(server.url(), "test_key".to_string(), 5, 20);
        let err = client.annotate("aGVsbG8=").await.unwrap_err();

        assert!(matches!(err, VisionError::ApiError(ref m) if m.contains("too large")));
    }

    #[tokio::test]
    async fn test_annotate_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/images:annotate?key=bad_key")
            .with_status(403)
            .create_async()
            .await;

        let client = VisionClient::new(server.url(), "bad_key".to_string(), 5, 20);
        let err = client.annotate("aGVsbG8=").await.unwrap_err();

        assert!(matches!(err, VisionError::Unauthorized));
    }
}
