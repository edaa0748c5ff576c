use clap::{ArgAction, ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "lyricbot",
    version,
    about = "LLM-assisted songwriting: generate, rewrite and transform lyrics from a song spec"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Verbosity: -v info, -vv debug, -vvv trace (prompts and raw responses)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print the built instruction(s) and temperature(s) instead of calling a model
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Text-generation backend
    #[arg(long, value_enum, global = true)]
    pub provider: Option<ProviderKind>,

    /// Model name to use (e.g. gpt-4o-mini). If 'none', acts like --no-model.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Disable model calls; return dummy lyrics instead
    #[arg(long, global = true)]
    pub no_model: bool,

    /// API key (otherwise uses OPENAI_API_KEY env var)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long, global = true)]
    pub ollama_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Openai,
    Ollama,
}

/// Where a subcommand reads its JSON request from.
#[derive(clap::Args, Debug)]
pub struct RequestInput {
    /// JSON request file; reads stdin when omitted or '-'
    #[arg(short, long)]
    pub request: Option<PathBuf>,
}

/// Subcommands, e.g. `lyricbot generate -r spec.json`
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write new lyrics from a song spec
    Generate(RequestInput),

    /// Rewrite a whole song against its spec
    Rewrite(RequestInput),

    /// Rewrite one section, leaving the rest untouched
    RewriteSection(RequestInput),

    /// Generate up to 6 alternative versions in parallel
    Variations(RequestInput),

    /// Apply a free-text edit to the song or one section
    CustomEdit(RequestInput),

    /// Change topic, mood or genre while keeping cadence, rhyme and structure
    Transform(RequestInput),

    /// List the [SECTION] headers found in a lyric sheet
    Sections {
        /// Lyrics file; reads stdin when omitted or '-'
        lyrics: Option<PathBuf>,
    },
}
