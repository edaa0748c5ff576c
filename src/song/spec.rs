use serde::{Deserialize, Serialize};

/// Value every slider takes when the request does not mention it.
pub const DEFAULT_SLIDER: u8 = 50;

/// Profanity setting that means "say nothing about profanity".
pub const PROFANITY_NONE: &str = "None";

fn default_slider() -> Option<u8> {
    Some(DEFAULT_SLIDER)
}

/// Structured description of the song the user wants.
///
/// Request parsing fills in the slider defaults, so the renderer only ever
/// sees resolved values. `SongSpec::default()` is the fully empty spec where
/// every slider is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongSpec {
    pub title: String,
    pub topic: String,
    pub genre: String,
    pub subgenre: String,
    pub mood: String,
    pub custom_mood: String,
    pub perspective: String,
    pub structure: String,
    pub rhyme_scheme: String,

    #[serde(default = "default_slider")]
    pub rhyme_variety: Option<u8>,
    #[serde(default = "default_slider")]
    pub internal_rhyme_density: Option<u8>,
    #[serde(default = "default_slider")]
    pub cadence_complexity: Option<u8>,
    #[serde(default = "default_slider")]
    pub word_choice: Option<u8>,
    #[serde(default = "default_slider")]
    pub directness: Option<u8>,
    #[serde(default = "default_slider")]
    pub ai_freedom: Option<u8>,

    pub imagery_progression: bool,
    pub profanity: String,
    pub forbidden_words: Vec<String>,
    pub sample_lyrics: String,
}

impl SongSpec {
    /// Empty spec with every slider at its default, as parsed from `{}`.
    pub fn with_default_sliders() -> Self {
        SongSpec {
            rhyme_variety: default_slider(),
            internal_rhyme_density: default_slider(),
            cadence_complexity: default_slider(),
            word_choice: default_slider(),
            directness: default_slider(),
            ai_freedom: default_slider(),
            ..SongSpec::default()
        }
    }

    /// `custom_mood` wins over the picked mood.
    pub fn effective_mood(&self) -> &str {
        if self.custom_mood.is_empty() {
            &self.mood
        } else {
            &self.custom_mood
        }
    }

    /// `"{subgenre} ({genre})"`, or whichever of the two is set.
    pub fn genre_label(&self) -> Option<String> {
        match (self.subgenre.is_empty(), self.genre.is_empty()) {
            (false, false) => Some(format!("{} ({})", self.subgenre, self.genre)),
            (false, true) => Some(self.subgenre.clone()),
            (true, false) => Some(self.genre.clone()),
            (true, true) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sliders_default_to_fifty_when_parsed() {
        let spec: SongSpec = serde_json::from_str(r#"{"title": "Rain"}"#).unwrap();
        assert_eq!(spec.title, "Rain");
        assert_eq!(spec.rhyme_variety, Some(50));
        assert_eq!(spec.ai_freedom, Some(50));
        assert!(!spec.imagery_progression);
        assert!(spec.forbidden_words.is_empty());
    }

    #[test]
    fn empty_object_matches_default_sliders() {
        let spec: SongSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec, SongSpec::with_default_sliders());
    }

    #[test]
    fn explicit_null_slider_stays_absent() {
        let spec: SongSpec = serde_json::from_str(r#"{"word_choice": null}"#).unwrap();
        assert_eq!(spec.word_choice, None);
        assert_eq!(spec.directness, Some(50));
    }

    #[test]
    fn negative_slider_is_rejected() {
        let parsed = serde_json::from_str::<SongSpec>(r#"{"directness": -4}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn in_memory_default_is_fully_empty() {
        let spec = SongSpec::default();
        assert_eq!(spec.rhyme_variety, None);
        assert_eq!(spec.ai_freedom, None);
        assert!(spec.title.is_empty());
    }

    #[test]
    fn genre_label_combinations() {
        let mut spec = SongSpec::default();
        assert_eq!(spec.genre_label(), None);

        spec.genre = "Rock".into();
        assert_eq!(spec.genre_label().as_deref(), Some("Rock"));

        spec.subgenre = "Grunge".into();
        assert_eq!(spec.genre_label().as_deref(), Some("Grunge (Rock)"));

        spec.genre.clear();
        assert_eq!(spec.genre_label().as_deref(), Some("Grunge"));
    }

    #[test]
    fn custom_mood_overrides_mood() {
        let mut spec = SongSpec {
            mood: "Sad".into(),
            ..SongSpec::default()
        };
        assert_eq!(spec.effective_mood(), "Sad");
        spec.custom_mood = "wistful but warm".into();
        assert_eq!(spec.effective_mood(), "wistful but warm");
    }
}
