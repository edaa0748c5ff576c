use log::debug;

use crate::cli_args::ProviderKind;
use crate::config::Config;
use crate::error::LyricError;
use crate::llm::TextProvider;
use crate::llm::noop::NoopClient;
use crate::llm::ollama::OllamaClient;
use crate::llm::openai::OpenAiClient;

/// Build the text provider selected by the resolved config.
pub fn build_provider(cfg: &Config) -> Result<Box<dyn TextProvider>, LyricError> {
    if cfg.no_model {
        debug!("Using NoopClient (no model calls)");
        return Ok(Box::new(NoopClient));
    }

    match cfg.provider {
        ProviderKind::Openai => {
            debug!(
                "Using OpenAiClient with model {} at {}",
                cfg.model, cfg.api_base_url
            );
            Ok(Box::new(OpenAiClient::new(
                cfg.openai_api_key.clone(),
                cfg.model.clone(),
                cfg.api_base_url.clone(),
            )?))
        }
        ProviderKind::Ollama => {
            debug!(
                "Using OllamaClient with model {} at {}",
                cfg.model, cfg.ollama_url
            );
            Ok(Box::new(OllamaClient::new(
                cfg.ollama_url.clone(),
                cfg.model.clone(),
            )?))
        }
    }
}
