//! `SongSpec` to an ordered list of prompt clauses.
//!
//! Every rule is independent: a field that is empty (or a slider that is
//! absent) contributes nothing, and no field is ever invented.

use crate::prompt::parameters::{CADENCE, DIRECTNESS, INTERNAL_RHYME, RHYME_VARIETY, WORD_CHOICE};
use crate::prompt::prompts;
use crate::song::spec::{PROFANITY_NONE, SongSpec};

/// Describe a perspective code; unknown values pass through untouched.
pub fn describe_perspective(perspective: &str) -> &str {
    match perspective {
        "I" => "First person (I/me)",
        "You" => "Second person (you)",
        "We" => "First person plural (we)",
        "3rd" => "Third person (he/she/they)",
        other => other,
    }
}

pub fn render(spec: &SongSpec) -> Vec<String> {
    let mut clauses = Vec::new();

    if !spec.title.is_empty() {
        clauses.push(format!("Song Title: {}", spec.title));
    }
    if !spec.topic.is_empty() {
        clauses.push(format!("Topic/Theme: {}", spec.topic));
    }
    if let Some(genre) = spec.genre_label() {
        clauses.push(format!("Genre: {genre}"));
    }

    let mood = spec.effective_mood();
    if !mood.is_empty() {
        clauses.push(format!("Mood/Emotion: {mood}"));
    }
    if !spec.perspective.is_empty() {
        clauses.push(format!(
            "Perspective: {}",
            describe_perspective(&spec.perspective)
        ));
    }
    if !spec.structure.is_empty() {
        clauses.push(format!("Song Structure: {}", spec.structure));
    }
    if !spec.rhyme_scheme.is_empty() {
        clauses.push(format!("Rhyme Scheme: {}", spec.rhyme_scheme));
    }

    if let Some(v) = spec.rhyme_variety {
        clauses.push(RHYME_VARIETY.clause(v));
    }
    if let Some(v) = spec.internal_rhyme_density {
        clauses.push(INTERNAL_RHYME.clause(v));
    }
    if let Some(v) = spec.cadence_complexity {
        clauses.push(CADENCE.clause(v));
    }
    if spec.imagery_progression {
        clauses.push(prompts::IMAGERY_CLAUSE.to_string());
    }
    if let Some(v) = spec.word_choice {
        clauses.push(WORD_CHOICE.clause(v));
    }
    if let Some(v) = spec.directness {
        clauses.push(DIRECTNESS.clause(v));
    }

    if !spec.profanity.is_empty() && spec.profanity != PROFANITY_NONE {
        clauses.push(format!("Profanity: {} allowed", spec.profanity));
    }
    if !spec.forbidden_words.is_empty() {
        clauses.push(format!(
            "Forbidden words/phrases: {}",
            spec.forbidden_words.join(", ")
        ));
    }

    // Always last; the leading newline leaves a blank line before the sample.
    if !spec.sample_lyrics.is_empty() {
        clauses.push(format!(
            "\nStyle Inspiration (write in a similar style to this):\n{}",
            spec.sample_lyrics
        ));
    }

    if clauses.is_empty() {
        clauses.push(prompts::FALLBACK_CLAUSE.to_string());
    }
    clauses
}

/// Clauses joined one per line.
pub fn render_text(spec: &SongSpec) -> String {
    render(spec).join("\n")
}
