use crate::cli_args::{Cli, ProviderKind};
use clap::ValueEnum;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Final resolved configuration for lyricbot.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderKind,
    pub model: String,
    /// Checked when a call is made, not here.
    pub openai_api_key: Option<String>,
    pub api_base_url: String,
    pub ollama_url: String,
    pub no_model: bool,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--provider`, ...)
    ///   2. Env vars (`LYRICBOT_MODEL`, `LYRICBOT_PROVIDER`, ...)
    ///   3. TOML `~/.config/lyricbot.toml`
    ///   4. Hardcoded defaults
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();
        Self::resolve(cli, file_cfg, |key| env::var(key).ok())
    }

    fn resolve(cli: &Cli, file_cfg: FileConfig, env_var: impl Fn(&str) -> Option<String>) -> Self {
        let provider = cli
            .provider
            .or_else(|| env_var("LYRICBOT_PROVIDER").and_then(|p| parse_provider(&p)))
            .or_else(|| file_cfg.provider.as_deref().and_then(parse_provider))
            .unwrap_or(ProviderKind::Openai);

        let model = cli
            .model
            .clone()
            .or_else(|| env_var("LYRICBOT_MODEL"))
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        // clap already folds OPENAI_API_KEY into `--api-key`.
        let openai_api_key = cli.api_key.clone().or(file_cfg.openai_api_key);

        let api_base_url = cli
            .api_base_url
            .clone()
            .or_else(|| env_var("LYRICBOT_API_BASE_URL"))
            .or(file_cfg.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let ollama_url = cli
            .ollama_url
            .clone()
            .or_else(|| env_var("OLLAMA_URL"))
            .or(file_cfg.ollama_url)
            .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());

        let no_model = cli.no_model || model.eq_ignore_ascii_case("none");

        Config {
            provider,
            model,
            openai_api_key,
            api_base_url,
            ollama_url,
            no_model,
        }
    }
}

fn parse_provider(name: &str) -> Option<ProviderKind> {
    let parsed = ProviderKind::from_str(name.trim(), true).ok();
    if parsed.is_none() {
        log::warn!("Ignoring unknown provider {name:?}");
    }
    parsed
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    pub provider: Option<String>,
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub openai_api_key: Option<String>,
    pub api_base_url: Option<String>,
    pub ollama_url: Option<String>,
}

/// Return `~/.config/lyricbot.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("lyricbot.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Could not read {}: {e}", path.display());
            return None;
        }
    };

    match toml::from_str::<FileConfig>(&data) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            log::warn!("Ignoring malformed {}: {e}", path.display());
            None
        }
    }
}
