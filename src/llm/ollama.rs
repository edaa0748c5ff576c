use musli::json;
use musli::{Decode, Encode};
use reqwest::blocking::Client;

use super::openai::REQUEST_TIMEOUT;
use super::{TextProvider, truncate};
use crate::error::LyricError;
use crate::prompt::prompts;

#[derive(Debug, Encode, Decode)]
struct OllamaMessage {
    role: String,
    content: String,
}

#[derive(Debug, Decode)]
struct OllamaChatResponse {
    message: OllamaMessage,
}

/// Synchronous Ollama provider using /api/chat.
pub struct OllamaClient {
    http: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self, LyricError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LyricError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

impl TextProvider for OllamaClient {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn generate(&self, prompt: &str, temperature: f64) -> Result<String, LyricError> {
        // Request structs we encode with musli::json.
        #[derive(Debug, Encode)]
        struct ChatOptions {
            temperature: f64,
        }

        #[derive(Debug, Encode)]
        struct ChatRequest {
            model: String,
            stream: bool,
            messages: Vec<OllamaMessage>,
            options: ChatOptions,
        }

        let req_body = ChatRequest {
            model: self.model.clone(),
            stream: false,
            messages: vec![
                OllamaMessage {
                    role: "system".to_string(),
                    content: prompts::SONGWRITER_SYSTEM.to_string(),
                },
                OllamaMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            options: ChatOptions { temperature },
        };

        let body_str = json::to_string(&req_body).map_err(|e| {
            LyricError::Provider(format!("failed to encode Ollama JSON request: {e}"))
        })?;

        log::info!(
            "Calling Ollama model {:?} at temperature {temperature}",
            &self.model
        );
        log::debug!("Instruction:\n{}", truncate(prompt, 3000));
        log::trace!("Ollama request body: {}", truncate(&body_str, 4000));

        let url = self.chat_url();
        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_str)
            .send()
            .map_err(|e| LyricError::Provider(format!("error calling Ollama at {url}: {e}")))?
            .error_for_status()
            .map_err(|e| LyricError::Provider(format!("Ollama HTTP error from {url}: {e}")))?;

        let resp_text = resp.text()?;
        log::trace!("Ollama raw JSON response: {resp_text}");

        let parsed: OllamaChatResponse = json::from_str(&resp_text)
            .map_err(|e| LyricError::Provider(format!("failed to decode Ollama JSON: {e}")))?;

        Ok(parsed.message.content.trim().to_string())
    }
}
