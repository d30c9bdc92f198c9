use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response carried no completion text")]
    NoCompletion,
}

impl GatewayError {
    /// Fixed human-readable message shown to the user instead of a
    /// completion. Rendered as a standalone notice, never stored as quiz
    /// content.
    pub fn notice(&self) -> &'static str {
        match self {
            GatewayError::Http(_) => "Error contacting Gemini API.",
            GatewayError::NoCompletion => "No response from Gemini.",
        }
    }
}

/// Seam between the handlers and the generative-text service. Handlers are
/// generic over it so tests can substitute a canned implementation.
pub(crate) trait GenerateText {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// First candidate's first text part, the only field the bot consumes.
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// All outbound calls to the Gemini API go through this client. Endpoint and
/// key are injected at construction so tests can point it at a stub server.
pub struct GeminiClient {
    client: Client,
    api_url: Url,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_url: Url, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

impl GenerateText for GeminiClient {
    /// One best-effort HTTPS POST per invocation. No retry, no backoff.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        log::debug!("Sending prompt to Gemini ({} chars)", prompt.len());

        let response = self
            .client
            .post(self.api_url.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateContentResponse = response.json().await?;
        body.into_text().ok_or(GatewayError::NoCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(raw: &str) -> Option<String> {
        serde_json::from_str::<GenerateContentResponse>(raw)
            .expect("test JSON should deserialize")
            .into_text()
    }

    #[test]
    fn extracts_first_text_part_of_first_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "1. What is AI?"}, {"text": "ignored"}]}},
                {"content": {"parts": [{"text": "second candidate"}]}}
            ]
        }"#;
        assert_eq!(extract(raw).as_deref(), Some("1. What is AI?"));
    }

    #[test]
    fn missing_candidates_yields_no_completion() {
        assert_eq!(extract(r#"{}"#), None);
        assert_eq!(extract(r#"{"candidates": []}"#), None);
    }

    #[test]
    fn candidate_without_content_or_parts_yields_no_completion() {
        assert_eq!(extract(r#"{"candidates": [{}]}"#), None);
        assert_eq!(extract(r#"{"candidates": [{"content": {"parts": []}}]}"#), None);
        assert_eq!(
            extract(r#"{"candidates": [{"content": {"parts": [{}]}}]}"#),
            None
        );
    }

    #[test]
    fn error_kinds_map_to_fixed_notices() {
        assert_eq!(GatewayError::NoCompletion.notice(), "No response from Gemini.");
    }

    #[test]
    fn request_envelope_matches_the_api_shape() {
        let request = GenerateContentRequest::from_prompt("hello");
        let raw = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(
            raw,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }
}
