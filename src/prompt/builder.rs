use serde::Serialize;

use crate::orchestrator::clamp_variant_count;
use crate::prompt::parameters::{TemperatureMode, freedom_to_temperature, strictness_directive};
use crate::prompt::prompts;
use crate::prompt::renderer::render_text;
use crate::song::request::{
    CustomEditRequest, GenerateRequest, RewriteRequest, RewriteSectionRequest, TransformRequest,
    VariationsRequest, non_blank,
};
use crate::song::sections::header_for;
use crate::song::{OperationContext, SongSpec};

/// Text sent to the provider plus the temperature to sample it at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
    pub temperature: f64,
    pub instruction: String,
}

/// What the orchestrator has to run for one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Plan {
    Single(Instruction),
    /// One instruction per variant index, in index order.
    Fanout(Vec<Instruction>),
}

pub fn build(ctx: &OperationContext) -> Plan {
    match ctx {
        OperationContext::Generate(req) => Plan::Single(generate(req)),
        OperationContext::RewriteWhole(req) => Plan::Single(rewrite_whole(req)),
        OperationContext::RewriteSection(req) => Plan::Single(rewrite_section(req)),
        OperationContext::Variations(req) => Plan::Fanout(variations(req)),
        OperationContext::CustomEdit(req) => Plan::Single(custom_edit(req)),
        OperationContext::Transform(req) => Plan::Single(transform(req)),
    }
}

/// The three format lines every template ends with.
fn format_footer(lead: &str) -> String {
    format!(
        "{lead}\n{headers}\n{blank}\n{no_commentary}",
        headers = prompts::SECTION_HEADERS,
        blank = prompts::BLANK_LINE_BETWEEN,
        no_commentary = prompts::NO_COMMENTARY,
    )
}

fn generation_temperature(spec: &SongSpec) -> f64 {
    freedom_to_temperature(spec.ai_freedom, TemperatureMode::Generation)
}

fn generate_text(spec: &SongSpec) -> String {
    format!(
        "Write original song lyrics based on these specifications:\n\n\
         {spec_text}\n\n\
         {strictness}\n\n\
         {footer}",
        spec_text = render_text(spec),
        strictness = strictness_directive(spec.ai_freedom),
        footer = format_footer("Output ONLY the lyrics."),
    )
}

pub fn generate(req: &GenerateRequest) -> Instruction {
    Instruction {
        temperature: generation_temperature(&req.song_spec),
        instruction: generate_text(&req.song_spec),
    }
}

pub fn rewrite_whole(req: &RewriteRequest) -> Instruction {
    let spec = &req.song_spec;
    let instruction = format!(
        "Rewrite this entire song while maintaining its core essence and theme.\n\n\
         Current lyrics:\n{lyrics}\n\n\
         Song specifications:\n{spec_text}\n\n\
         {strictness}\n\n\
         {footer}",
        lyrics = req.current_lyrics,
        spec_text = render_text(spec),
        strictness = strictness_directive(spec.ai_freedom),
        footer = format_footer("Output ONLY the lyrics."),
    );

    Instruction {
        temperature: generation_temperature(spec),
        instruction,
    }
}

pub fn rewrite_section(req: &RewriteSectionRequest) -> Instruction {
    let spec = &req.song_spec;
    let section = req.section.trim();

    let mut instruction = format!(
        "Rewrite ONLY the {section} section of this song.\n\n\
         Current lyrics:\n{lyrics}\n\n\
         Song specifications:\n{spec_text}\n",
        lyrics = req.current_lyrics,
        spec_text = render_text(spec),
    );

    if let Some(scheme) = non_blank(&req.section_rhyme_scheme) {
        instruction.push_str(&format!(
            "IMPORTANT: Use {scheme} rhyme scheme for this {section}.\n"
        ));
    }

    instruction.push('\n');
    instruction.push_str(strictness_directive(spec.ai_freedom));
    instruction.push_str("\n\n");
    instruction.push_str(&format_footer(&format!(
        "Output ONLY the complete song lyrics with the rewritten {section}. \
         Keep all other sections exactly as they are, character for character."
    )));

    Instruction {
        temperature: generation_temperature(spec),
        instruction,
    }
}

/// Title, topic, genre and mood, with a placeholder for anything unset.
fn spec_highlights(spec: &SongSpec, include_topic: bool) -> String {
    let or = |value: &str, fallback: &'static str| -> String {
        if value.is_empty() {
            fallback.to_string()
        } else {
            value.to_string()
        }
    };

    let mut genre = or(&spec.genre, "Any");
    if !spec.subgenre.is_empty() {
        genre.push_str(&format!(" ({})", spec.subgenre));
    }

    let mut out = format!("Title: {}\n", or(&spec.title, "Untitled"));
    if include_topic {
        out.push_str(&format!("Topic: {}\n", or(&spec.topic, "General")));
    }
    out.push_str(&format!("Genre: {genre}\n"));
    out.push_str(&format!("Mood: {}", or(spec.effective_mood(), "Any")));
    out
}

fn section_variation_text(req: &VariationsRequest, section: &str) -> String {
    let mut text = format!(
        "Generate an alternative version of the {section} for this song.\n\n\
         Current lyrics:\n{lyrics}\n\n\
         Song specifications:\n{highlights}\n",
        lyrics = req.current_lyrics,
        highlights = spec_highlights(&req.song_spec, true),
    );

    if let Some(scheme) = non_blank(&req.section_rhyme_scheme) {
        text.push_str(&format!(
            "IMPORTANT: Use {scheme} rhyme scheme for this section.\n"
        ));
    }

    text.push_str(&format!(
        "\nCreate a fresh, creative alternative for the {section}.\n\
         Make it distinctly different from the original while keeping the same theme.\n\
         Output ONLY the {section} lyrics, nothing else. \
         Include the section header like {header}.\n\
         {blank}\n\
         {no_commentary}",
        header = header_for(section),
        blank = prompts::BLANK_LINE_BETWEEN,
        no_commentary = prompts::NO_COMMENTARY,
    ));
    text
}

/// One instruction per variant, up to the variant cap.
pub fn variations(req: &VariationsRequest) -> Vec<Instruction> {
    let count = clamp_variant_count(req.count);

    let text = match non_blank(&req.section) {
        Some(section) => section_variation_text(req, section),
        None => format!(
            "{}\n\n{}",
            generate_text(&req.song_spec),
            prompts::EXPLORE_DIFFERENTLY
        ),
    };

    (0..count)
        .map(|index| Instruction {
            temperature: freedom_to_temperature(
                req.song_spec.ai_freedom,
                TemperatureMode::Variation { index },
            ),
            instruction: text.clone(),
        })
        .collect()
}

pub fn custom_edit(req: &CustomEditRequest) -> Instruction {
    let spec = &req.song_spec;
    let context = spec_highlights(spec, false);

    let instruction = match non_blank(&req.section) {
        Some(section) => format!(
            "Edit the {section} of this song based on the following instruction:\n\n\
             USER INSTRUCTION: {user}\n\n\
             Current full lyrics:\n{lyrics}\n\n\
             Song context:\n{context}\n\n\
             IMPORTANT: Apply the user's instruction ONLY to the {section}. \
             Keep all other sections exactly as they are.\n\
             {footer}",
            user = req.instruction.trim(),
            lyrics = req.current_lyrics,
            footer = format_footer(&format!(
                "Output the COMPLETE song with all sections, with only the {section} modified."
            )),
        ),
        None => format!(
            "Edit this entire song based on the following instruction:\n\n\
             USER INSTRUCTION: {user}\n\n\
             Current lyrics:\n{lyrics}\n\n\
             Song context:\n{context}\n\n\
             Apply the user's instruction to improve the song.\n\
             {footer}",
            user = req.instruction.trim(),
            lyrics = req.current_lyrics,
            footer = format_footer("Output ONLY the edited lyrics."),
        ),
    };

    Instruction {
        temperature: freedom_to_temperature(spec.ai_freedom, TemperatureMode::CustomEdit),
        instruction,
    }
}

fn bullet_list(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        return format!("- {fallback}");
    }
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn transform(req: &TransformRequest) -> Instruction {
    let mut preserve = Vec::new();
    if req.keep_cadence {
        preserve.push(prompts::PRESERVE_CADENCE.to_string());
    }
    if req.keep_rhyme_scheme {
        preserve.push(prompts::PRESERVE_RHYME_SCHEME.to_string());
    }
    if req.keep_structure {
        preserve.push(prompts::PRESERVE_STRUCTURE.to_string());
    }

    let mut change = Vec::new();
    if let Some(topic) = non_blank(&req.new_topic) {
        change.push(format!("Change the TOPIC/SUBJECT to: {topic}"));
    }
    if let Some(mood) = non_blank(&req.new_mood) {
        change.push(format!("Change the MOOD/EMOTION to: {mood}"));
    }
    if let Some(genre) = non_blank(&req.new_genre) {
        change.push(format!("Adapt the STYLE to fit: {genre} genre"));
    }

    let mut instruction = format!(
        "Transform these existing lyrics while preserving their musical qualities.\n\n\
         ORIGINAL LYRICS:\n{lyrics}\n\n\
         WHAT TO PRESERVE:\n{preserve}\n\n\
         WHAT TO CHANGE:\n{change}\n",
        lyrics = req.current_lyrics,
        preserve = bullet_list(&preserve, prompts::PRESERVE_NOTHING),
        change = bullet_list(&change, prompts::CHANGE_NOTHING),
    );

    if let Some(extra) = non_blank(&req.additional_instructions) {
        instruction.push_str(&format!("\nAdditional instructions: {extra}\n"));
    }

    instruction.push('\n');
    instruction.push_str(prompts::TRANSFORM_GUIDELINES);
    instruction.push_str("\n\n");
    instruction.push_str(&format_footer("Output ONLY the transformed lyrics."));

    Instruction {
        temperature: freedom_to_temperature(None, TemperatureMode::Transform),
        instruction,
    }
}
