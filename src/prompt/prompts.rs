pub const SONGWRITER_SYSTEM: &str = r#"You are a professional songwriter and lyricist.
You write compelling, creative, and emotionally resonant song lyrics.
You follow formatting instructions precisely."#;

pub const FALLBACK_CLAUSE: &str = "Write original song lyrics";

pub const IMAGERY_CLAUSE: &str =
    "Imagery: Introduce new imagery as the song progresses, evolving the visual landscape";

pub const STRICT_ADHERENCE: &str = "Follow the specifications exactly. Do not deviate from the requested style, structure, or content.";

pub const BALANCED_ADHERENCE: &str = "Follow the specifications while allowing some creative interpretation where it improves the flow.";

pub const CREATIVE_LATITUDE: &str = "Use these specifications as a starting point but feel free to make creative additions that enhance the song while staying true to the theme.";

/// Header examples shared by every template. Downstream parsing depends on it.
pub const SECTION_HEADERS: &str =
    "Use section headers exactly like: [VERSE 1], [CHORUS], [VERSE 2], [BRIDGE], etc.";

pub const BLANK_LINE_BETWEEN: &str = "Leave a blank line between sections.";

pub const NO_COMMENTARY: &str = "Do not include any explanations or commentary.";

pub const EXPLORE_DIFFERENTLY: &str =
    "Create a fresh, creative version that explores the theme differently.";

pub const PRESERVE_CADENCE: &str =
    "PRESERVE the exact rhythm, cadence, and syllable patterns of each line";

pub const PRESERVE_RHYME_SCHEME: &str = "PRESERVE the exact rhyme scheme and rhyme positions";

pub const PRESERVE_STRUCTURE: &str =
    "PRESERVE the exact song structure (same sections, same number of lines per section)";

pub const PRESERVE_NOTHING: &str = "You may adjust structure as needed";

pub const CHANGE_NOTHING: &str = "Improve and refine the lyrics";

pub const TRANSFORM_GUIDELINES: &str = r#"IMPORTANT GUIDELINES:
- Each new line should have the same number of syllables as the original line it replaces
- Rhyming words should rhyme in the same positions as the original
- The "singability" and flow must match the original"#;
