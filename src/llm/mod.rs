pub mod noop;
pub mod ollama;
pub mod openai;

use crate::error::LyricError;

/// A text-generation backend: one prompt in, one completion out.
pub trait TextProvider: Send + Sync {
    /// Provider name for logs, e.g. "openai".
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    /// Complete `prompt` under the songwriter system message at `temperature`.
    fn generate(&self, prompt: &str, temperature: f64) -> Result<String, LyricError>;
}

/// Truncate long strings for debug logging.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut cut = max_len;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...\n[truncated {} chars]", &s[..cut], s[cut..].chars().count())
}
