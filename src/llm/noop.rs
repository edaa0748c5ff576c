use super::TextProvider;
use crate::error::LyricError;

/// Offline provider for `--no-model`: returns a fixed lyric sheet.
pub struct NoopClient;

impl TextProvider for NoopClient {
    fn name(&self) -> &str {
        "noop"
    }

    fn model(&self) -> &str {
        "none"
    }

    fn generate(&self, prompt: &str, temperature: f64) -> Result<String, LyricError> {
        let first_line = prompt.lines().next().unwrap_or_default();
        Ok(format!(
            "[VERSE 1]\nDummy lyrics at temperature {temperature:.2}\n{first_line}\n\n\
             [CHORUS]\n(LLM disabled)"
        ))
    }
}
