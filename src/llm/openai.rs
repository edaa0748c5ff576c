use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{TextProvider, truncate};
use crate::error::LyricError;
use crate::prompt::prompts;

/// Upper bound on one provider round trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// Minimal request/response structs for OpenAI Chat Completions API.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// OpenAI-compatible chat completions provider.
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: Option<String>,
        model: String,
        api_base_url: String,
    ) -> Result<Self, LyricError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LyricError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(OpenAiClient {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn chat_url(&self) -> String {
        if self.api_base_url.ends_with("/v1") {
            format!("{}/chat/completions", self.api_base_url)
        } else {
            format!("{}/v1/chat/completions", self.api_base_url)
        }
    }
}

impl TextProvider for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn generate(&self, prompt: &str, temperature: f64) -> Result<String, LyricError> {
        // Checked per call: a missing key fails this request, not startup.
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            LyricError::Configuration(
                "OPENAI_API_KEY (or --api-key) is required unless --no-model is used".into(),
            )
        })?;

        let req = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompts::SONGWRITER_SYSTEM,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature,
        };

        log::info!(
            "Calling OpenAI model {:?} at temperature {temperature}",
            &self.model
        );
        log::debug!("Instruction:\n{}", truncate(prompt, 3000));

        let resp = self
            .client
            .post(self.chat_url())
            .bearer_auth(api_key)
            .json(&req)
            .send()?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(LyricError::Provider(format!(
                "OpenAI API error: HTTP {} - {}",
                status.as_u16(),
                text
            )));
        }

        let chat_resp: ChatResponse = resp
            .json()
            .map_err(|e| LyricError::Provider(format!("failed to parse OpenAI response: {e}")))?;

        if let Some(usage) = &chat_resp.usage {
            log::info!(
                "Token usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        let content = chat_resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LyricError::Provider("no choices returned from OpenAI".into()))?;

        log::trace!("OpenAI raw completion:\n{content}");
        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_handles_v1_suffix() {
        let a = OpenAiClient::new(None, "m".into(), "https://api.openai.com/".into()).unwrap();
        assert_eq!(a.chat_url(), "https://api.openai.com/v1/chat/completions");

        let b = OpenAiClient::new(None, "m".into(), "http://localhost:8080/v1".into()).unwrap();
        assert_eq!(b.chat_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let client =
            OpenAiClient::new(Some("  ".into()), "m".into(), "http://127.0.0.1:9".into()).unwrap();
        let err = client.generate("write a song", 0.5).unwrap_err();
        assert!(matches!(err, LyricError::Configuration(_)));
    }
}
