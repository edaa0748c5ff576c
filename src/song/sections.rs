use serde::Serialize;

/// A bracketed section found in a lyric sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Upper-cased header label, e.g. `VERSE 1`.
    pub name: String,
    /// Non-blank lines between this header and the next one.
    pub line_count: usize,
}

/// Split lyrics on `[HEADER]` lines. Text before the first header is ignored.
pub fn parse_sections(lyrics: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for line in lyrics.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = header_name(line) {
            sections.push(Section {
                name,
                line_count: 0,
            });
        } else if let Some(current) = sections.last_mut() {
            current.line_count += 1;
        }
    }

    sections
}

/// Upper-case form a section name takes as a header, e.g. `Verse 1` -> `[VERSE 1]`.
pub fn header_for(section: &str) -> String {
    format!("[{}]", section.trim().to_uppercase())
}

fn header_name(line: &str) -> Option<String> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    if inner.is_empty() || inner.contains(['[', ']']) {
        return None;
    }
    Some(inner.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_in_order() {
        let lyrics = "[VERSE 1]\nline one\nline two\n\n[Chorus]\nhook\n\n[BRIDGE]\n";
        let sections = parse_sections(lyrics);
        assert_eq!(
            sections,
            vec![
                Section { name: "VERSE 1".into(), line_count: 2 },
                Section { name: "CHORUS".into(), line_count: 1 },
                Section { name: "BRIDGE".into(), line_count: 0 },
            ]
        );
    }

    #[test]
    fn ignores_preamble_and_inline_brackets() {
        let lyrics = "Here are your lyrics:\n[VERSE 1]\nI said [softly] hello\n";
        let sections = parse_sections(lyrics);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].line_count, 1);
    }

    #[test]
    fn no_headers_means_no_sections() {
        assert!(parse_sections("just some words\nand more").is_empty());
        assert!(parse_sections("[]\n[ ]").is_empty());
    }

    #[test]
    fn header_for_upper_cases() {
        assert_eq!(header_for(" Verse 2 "), "[VERSE 2]");
    }
}
