//! Recommendation matcher backing the chat endpoint.
//!
//! Matches free-text queries against the attraction catalogue with plain
//! case-insensitive substring search, assembles a grounding context from the
//! matches and delegates the reply to an injected text-completion provider.
//! Catalogue results are never withheld because of a provider outage.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::{
    config::AssistantConfig,
    error::{AppError, AppResult},
    models::attraction::Attraction,
    repository::Repository,
};

/// Maximum number of catalogue matches per query
const MAX_MATCHES: i64 = 3;

/// Description snippet length for context lines
const SNIPPET_CHARS: usize = 300;

const EMPTY_QUERY_REPLY: &str =
    "Please tell me what kind of place or experience you are looking for, \
     and I will suggest something from our catalogue.";

const FALLBACK_REPLY: &str =
    "Sorry, the travel assistant is unavailable right now. Please try again later.";

const CONTEXT_HEADER: &str = "Relevant catalogue entries:\n";

const SYSTEM_INSTRUCTION: &str =
    "You are a travel assistant for a tourism catalogue. Answer the visitor's \
     question in a helpful, concise way. Ground your recommendations in the \
     catalogue entries provided below; do not invent attractions.\n\n";

/// A recommendation surfaced alongside the generated reply
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub id: i32,
    pub title: String,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Chat reply with grounded recommendations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AskResponse {
    pub reply: String,
    pub recommendations: Vec<Recommendation>,
}

/// Generative text provider seam. Injected at process start so the matcher
/// carries no hidden global client and tests can substitute a double.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextCompletionProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> AppResult<String>;
}

/// HTTP chat-completions client (OpenAI-compatible wire format)
pub struct HttpCompletionProvider {
    client: reqwest::Client,
    config: AssistantConfig,
}

impl HttpCompletionProvider {
    pub fn new(config: AssistantConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl TextCompletionProvider for HttpCompletionProvider {
    async fn complete(&self, system: &str, user: &str) -> AppResult<String> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user},
            ],
        });

        let mut request = self.client.post(&self.config.base_url).json(&body);
        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Completion provider returned {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid completion response: {}", e)))?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::Upstream("Completion response had no content".to_string()))
    }
}

/// Build one grounding-context line for a matched attraction
fn context_line(attraction: &Attraction) -> String {
    let snippet: String = attraction.description.chars().take(SNIPPET_CHARS).collect();
    format!("{}: {}...", attraction.name, snippet)
}

/// Assemble the grounding context from the matched attractions; empty when
/// nothing matched
fn build_context(matches: &[Attraction]) -> String {
    if matches.is_empty() {
        return String::new();
    }
    let lines: Vec<String> = matches.iter().map(context_line).collect();
    format!("{}{}", CONTEXT_HEADER, lines.join("\n"))
}

#[derive(Clone)]
pub struct AssistantService {
    repository: Repository,
    provider: Arc<dyn TextCompletionProvider>,
}

impl AssistantService {
    pub fn new(repository: Repository, provider: Arc<dyn TextCompletionProvider>) -> Self {
        Self { repository, provider }
    }

    /// Answer a free-text query with a generated reply plus grounded
    /// recommendations.
    ///
    /// An empty or whitespace-only query short-circuits to a fixed prompt
    /// without touching the catalogue. Provider failures degrade to a fixed
    /// apology while the recommendations are still returned.
    pub async fn ask(&self, message: &str) -> AppResult<AskResponse> {
        let query = message.trim();
        if query.is_empty() {
            return Ok(AskResponse {
                reply: EMPTY_QUERY_REPLY.to_string(),
                recommendations: Vec::new(),
            });
        }

        let matches = self
            .repository
            .attractions
            .search_snippets(query, MAX_MATCHES)
            .await?;

        let recommendations: Vec<Recommendation> = matches
            .iter()
            .map(|a| Recommendation {
                id: a.id,
                title: a.name.clone(),
                image: a.image.clone(),
                kind: "attraction".to_string(),
            })
            .collect();

        let context = build_context(&matches);
        let system = format!("{}{}", SYSTEM_INSTRUCTION, context);

        let reply = reply_or_fallback(self.provider.complete(&system, query).await);

        Ok(AskResponse {
            reply,
            recommendations,
        })
    }
}

/// Degrade provider failures to the fixed apology reply; the request still
/// succeeds from the caller's perspective.
fn reply_or_fallback(result: AppResult<String>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Completion provider failed, degrading: {}", e);
            FALLBACK_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::models::attraction::AttractionStatus;

    fn attraction(id: i32, name: &str, description: &str) -> Attraction {
        Attraction {
            id,
            name: name.to_string(),
            region_id: 1,
            category_id: 1,
            region_name: "North".to_string(),
            category_name: "Nature".to_string(),
            description: description.to_string(),
            image: Some(format!("https://img.example/{}.jpg", id)),
            latitude: None,
            longitude: None,
            visitors_count: 0,
            status: AttractionStatus::Active,
            entrance_fee: None,
            best_time: None,
            rating: 0.0,
            reviews_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_context_line_truncates_long_descriptions() {
        let long = "x".repeat(500);
        let a = attraction(1, "Blue Lake", &long);
        let line = context_line(&a);
        assert!(line.starts_with("Blue Lake: "));
        assert!(line.ends_with("..."));
        // name + ": " + 300 chars + "..."
        assert_eq!(line.chars().count(), "Blue Lake: ".chars().count() + 300 + 3);
    }

    #[test]
    fn test_context_line_handles_multibyte_descriptions() {
        let long = "ü".repeat(400);
        let a = attraction(1, "Höhle", &long);
        let line = context_line(&a);
        // Truncation is by characters, never mid-codepoint
        assert!(line.contains(&"ü".repeat(300)));
        assert!(!line.contains(&"ü".repeat(301)));
    }

    #[test]
    fn test_build_context_empty_when_no_matches() {
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn test_build_context_prefixes_header() {
        let matches = vec![
            attraction(1, "Blue Lake", "A lake."),
            attraction(2, "High Pass", "A pass."),
        ];
        let context = build_context(&matches);
        assert!(context.starts_with(CONTEXT_HEADER));
        assert!(context.contains("Blue Lake: A lake...."));
        assert!(context.contains("High Pass: A pass...."));
    }

    #[tokio::test]
    async fn test_provider_failure_degrades_to_fixed_reply() {
        let mut provider = MockTextCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_, _| Err(AppError::Upstream("connection refused".to_string())));
        let reply = reply_or_fallback(provider.complete("system", "user").await);
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_provider_reply_passes_through() {
        let mut provider = MockTextCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_, _| Ok("Visit the Blue Lake.".to_string()));
        let reply = reply_or_fallback(provider.complete("system", "user").await);
        assert_eq!(reply, "Visit the Blue Lake.");
    }

    #[test]
    fn test_recommendation_serializes_type_field() {
        let rec = Recommendation {
            id: 4,
            title: "Blue Lake".to_string(),
            image: None,
            kind: "attraction".to_string(),
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["type"], "attraction");
        assert_eq!(value["id"], 4);
    }
}
