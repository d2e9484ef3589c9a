//! Generation boundary: the one I/O-performing component in the core.
//!
//! [`PlanGenerator`] is the seam between the session controller and the
//! external text-generation service; tests substitute a stub implementation.
//! [`GeminiClient`] is the production implementation, issuing exactly one
//! HTTP round-trip per invocation with the response body constrained to the
//! lesson plan schema. No retries, no caching, no request deduplication.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlannerError, Result};
use crate::models::LessonPlan;
use crate::prompt::LessonPrompt;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Abstract lesson plan generator.
///
/// Implementations take a built prompt and return structured data congruent
/// with [`LessonPlan`]. Callers are responsible for echoing the request
/// fields back onto the result.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Perform one generation round-trip.
    async fn generate(&self, prompt: &LessonPrompt) -> Result<LessonPlan>;
}

/// Gemini client generating schema-constrained lesson plans.
///
/// Configuration:
/// - `GEMINI_API_KEY`: API credential (required)
/// - `GEMINI_MODEL`: model name (optional, defaults to `gemini-2.5-flash`)
#[derive(Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiClient {
    /// Creates a client for the given credential and model.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if the API key is empty. A
    /// missing credential is fatal at construction time, before any network
    /// activity.
    pub fn new(api_key: impl Into<String>, model: &str) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(PlannerError::configuration("API key must not be empty"));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            url: format!("{BASE_URL}/{model}:generateContent"),
            api_key,
        })
    }

    /// Creates a client from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if `GEMINI_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_model(None)
    }

    /// Creates a client from the environment with an optional model
    /// override taking precedence over `GEMINI_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if `GEMINI_API_KEY` is not set.
    pub fn from_env_with_model(model_override: Option<&str>) -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            PlannerError::configuration("GEMINI_API_KEY environment variable not set")
        })?;
        let model = match model_override {
            Some(model) => model.to_string(),
            None => std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        };

        Self::new(api_key, &model)
    }
}

/// Request body for the generateContent endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

/// Response from the generateContent endpoint.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &LessonPrompt) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.instruction.clone()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: prompt.schema.clone(),
            },
        }
    }
}

/// Extract the concatenated text of the first candidate.
fn candidate_text(response: GenerateContentResponse) -> Result<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| PlannerError::generation("response contained no candidates"))?;

    let text: String = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        return Err(PlannerError::generation("response contained no text"));
    }
    Ok(text)
}

/// Parse response text into a plan, rejecting anything non-conforming.
fn parse_plan(text: &str) -> Result<LessonPlan> {
    serde_json::from_str(text.trim()).map_err(|e| {
        PlannerError::generation(format!(
            "response did not conform to the lesson plan schema: {e}"
        ))
    })
}

#[async_trait]
impl PlanGenerator for GeminiClient {
    async fn generate(&self, prompt: &LessonPrompt) -> Result<LessonPlan> {
        let request = GenerateContentRequest::from_prompt(prompt);

        debug!("Requesting lesson plan generation: {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| PlannerError::generation(format!("network error: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PlannerError::generation(format!("HTTP {status}: {body}")));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PlannerError::generation(format!("unreadable response body: {e}")))?;

        let text = candidate_text(parsed)?;
        debug!("Received {} chars of structured output", text.len());

        parse_plan(&text)
    }
}
