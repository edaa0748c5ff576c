use serde::Deserialize;

use crate::error::LyricError;
use crate::song::spec::SongSpec;

/// Variation count used when the request does not name one.
pub const DEFAULT_VARIATION_COUNT: usize = 4;

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "SongSpec::with_default_sliders")]
    pub song_spec: SongSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RewriteRequest {
    #[serde(default = "SongSpec::with_default_sliders")]
    pub song_spec: SongSpec,
    #[serde(default)]
    pub current_lyrics: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RewriteSectionRequest {
    #[serde(default = "SongSpec::with_default_sliders")]
    pub song_spec: SongSpec,
    #[serde(default)]
    pub current_lyrics: String,
    /// "Verse 1", "Chorus", "Bridge", ...
    #[serde(default)]
    pub section: String,
    pub section_rhyme_scheme: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariationsRequest {
    #[serde(default = "SongSpec::with_default_sliders")]
    pub song_spec: SongSpec,
    #[serde(default)]
    pub current_lyrics: String,
    /// Whole-song variations when absent.
    pub section: Option<String>,
    pub section_rhyme_scheme: Option<String>,
    #[serde(default = "default_count")]
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomEditRequest {
    #[serde(default = "SongSpec::with_default_sliders")]
    pub song_spec: SongSpec,
    #[serde(default)]
    pub current_lyrics: String,
    pub section: Option<String>,
    /// The user's free-text edit instruction.
    #[serde(default, rename = "prompt")]
    pub instruction: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransformRequest {
    #[serde(default)]
    pub current_lyrics: String,
    pub new_topic: Option<String>,
    pub new_mood: Option<String>,
    pub new_genre: Option<String>,
    #[serde(default = "default_true")]
    pub keep_cadence: bool,
    #[serde(default = "default_true")]
    pub keep_rhyme_scheme: bool,
    #[serde(default = "default_true")]
    pub keep_structure: bool,
    pub additional_instructions: Option<String>,
}

fn default_count() -> usize {
    DEFAULT_VARIATION_COUNT
}

fn default_true() -> bool {
    true
}

/// Which operation the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Generate,
    Rewrite,
    RewriteSection,
    Variations,
    CustomEdit,
    Transform,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Generate => "generate",
            OperationKind::Rewrite => "rewrite",
            OperationKind::RewriteSection => "rewrite-section",
            OperationKind::Variations => "variations",
            OperationKind::CustomEdit => "custom-edit",
            OperationKind::Transform => "transform",
        }
    }
}

/// One lyric operation and everything it needs.
#[derive(Debug, Clone)]
pub enum OperationContext {
    Generate(GenerateRequest),
    RewriteWhole(RewriteRequest),
    RewriteSection(RewriteSectionRequest),
    Variations(VariationsRequest),
    CustomEdit(CustomEditRequest),
    Transform(TransformRequest),
}

impl OperationContext {
    /// Parse a JSON request body for `kind` and validate it.
    pub fn from_json(kind: OperationKind, body: &str) -> Result<Self, LyricError> {
        let ctx = match kind {
            OperationKind::Generate => OperationContext::Generate(serde_json::from_str(body)?),
            OperationKind::Rewrite => OperationContext::RewriteWhole(serde_json::from_str(body)?),
            OperationKind::RewriteSection => {
                OperationContext::RewriteSection(serde_json::from_str(body)?)
            }
            OperationKind::Variations => OperationContext::Variations(serde_json::from_str(body)?),
            OperationKind::CustomEdit => OperationContext::CustomEdit(serde_json::from_str(body)?),
            OperationKind::Transform => OperationContext::Transform(serde_json::from_str(body)?),
        };
        ctx.validate()?;
        Ok(ctx)
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            OperationContext::Generate(_) => OperationKind::Generate,
            OperationContext::RewriteWhole(_) => OperationKind::Rewrite,
            OperationContext::RewriteSection(_) => OperationKind::RewriteSection,
            OperationContext::Variations(_) => OperationKind::Variations,
            OperationContext::CustomEdit(_) => OperationKind::CustomEdit,
            OperationContext::Transform(_) => OperationKind::Transform,
        }
    }

    /// Reject requests that are missing the fields their operation depends on.
    pub fn validate(&self) -> Result<(), LyricError> {
        let kind = self.kind().as_str();
        match self {
            OperationContext::Generate(_) => Ok(()),
            OperationContext::RewriteWhole(r) => require(kind, "current_lyrics", &r.current_lyrics),
            OperationContext::RewriteSection(r) => {
                require(kind, "current_lyrics", &r.current_lyrics)?;
                require(kind, "section", &r.section)
            }
            OperationContext::Variations(r) => require(kind, "current_lyrics", &r.current_lyrics),
            OperationContext::CustomEdit(r) => {
                require(kind, "current_lyrics", &r.current_lyrics)?;
                require(kind, "prompt", &r.instruction)
            }
            OperationContext::Transform(r) => require(kind, "current_lyrics", &r.current_lyrics),
        }
    }
}

fn require(kind: &str, field: &str, value: &str) -> Result<(), LyricError> {
    if value.trim().is_empty() {
        return Err(LyricError::Validation(format!(
            "{kind} requires a non-empty `{field}`"
        )));
    }
    Ok(())
}

/// Treat `Some("")` and whitespace-only strings like `None`.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_accepts_empty_body() {
        let ctx = OperationContext::from_json(OperationKind::Generate, "{}").unwrap();
        assert_eq!(ctx.kind(), OperationKind::Generate);
        let OperationContext::Generate(req) = ctx else {
            panic!("expected generate context");
        };
        assert_eq!(req.song_spec.ai_freedom, Some(50));
    }

    #[test]
    fn rewrite_section_requires_section() {
        let body = r#"{"current_lyrics": "[VERSE 1]\nla la", "section": "  "}"#;
        let err = OperationContext::from_json(OperationKind::RewriteSection, body).unwrap_err();
        assert!(matches!(err, LyricError::Validation(msg) if msg.contains("`section`")));
    }

    #[test]
    fn custom_edit_requires_lyrics_and_prompt() {
        let err = OperationContext::from_json(OperationKind::CustomEdit, r#"{"prompt": "darker"}"#)
            .unwrap_err();
        assert!(matches!(err, LyricError::Validation(msg) if msg.contains("`current_lyrics`")));

        let err = OperationContext::from_json(
            OperationKind::CustomEdit,
            r#"{"current_lyrics": "[CHORUS]\nhey"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LyricError::Validation(msg) if msg.contains("`prompt`")));
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let err = OperationContext::from_json(OperationKind::Generate, "{not json").unwrap_err();
        assert!(matches!(err, LyricError::Validation(_)));
    }

    #[test]
    fn transform_defaults_preserve_everything() {
        let ctx = OperationContext::from_json(
            OperationKind::Transform,
            r#"{"current_lyrics": "[VERSE 1]\nold words"}"#,
        )
        .unwrap();
        let OperationContext::Transform(req) = ctx else {
            panic!("expected transform context");
        };
        assert!(req.keep_cadence && req.keep_rhyme_scheme && req.keep_structure);
        assert!(req.new_topic.is_none());
    }

    #[test]
    fn variations_default_count() {
        let ctx = OperationContext::from_json(
            OperationKind::Variations,
            r#"{"current_lyrics": "[CHORUS]\nhey"}"#,
        )
        .unwrap();
        let OperationContext::Variations(req) = ctx else {
            panic!("expected variations context");
        };
        assert_eq!(req.count, DEFAULT_VARIATION_COUNT);
    }

    #[test]
    fn non_blank_filters_empty_values() {
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some("   ".into())), None);
        assert_eq!(non_blank(&Some(" ABAB ".into())), Some("ABAB"));
    }
}
