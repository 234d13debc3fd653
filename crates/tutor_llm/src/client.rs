//! Chat-completion client for the Groq OpenAI-compatible API.
//!
//! The solver never talks to this module directly; callers inject a
//! [`TextGenerator`] so the pure algebra core stays testable without a
//! network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const GROQ_MODEL: &str = "meta-llama/llama-4-maverick-17b-128e-instruct";

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned status {status}")]
    Status { status: u16, body: String },
    #[error("malformed completion body")]
    MalformedBody,
}

/// Limits and content for one generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Injected text-generation capability.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, req: &GenerationRequest) -> Result<String, GenerationError>;
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Groq-backed [`TextGenerator`]. Cheap to clone; the inner reqwest client
/// pools connections.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl ChatClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: GROQ_MODEL.to_string(),
        }
    }

    /// Issue one chat-completion call and return the upstream JSON body
    /// verbatim. The draw proxy relays this without reshaping it.
    pub async fn chat_raw(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<serde_json::Value, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let payload = ChatPayload {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens,
            temperature,
        };

        let response = self
            .http
            .post(GROQ_API_URL)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TextGenerator for ChatClient {
    async fn generate(&self, req: &GenerationRequest) -> Result<String, GenerationError> {
        let body = self
            .chat_raw(&req.system, &req.user, req.max_tokens, req.temperature)
            .await?;
        let completion: ChatCompletion =
            serde_json::from_value(body).map_err(|_| GenerationError::MalformedBody)?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or(GenerationError::MalformedBody)
    }
}
