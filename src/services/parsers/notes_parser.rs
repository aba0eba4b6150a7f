use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::response_format::{MAX_NOTE_SECTIONS, NOTES_HEADING},
    models::domain::{NoteSection, NotesDocument},
};

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(NOTES_HEADING).expect("NOTES_HEADING is a valid regex pattern"));

struct HeadingSpan<'a> {
    title: &'a str,
    start: usize,
    end: usize,
}

/// Splits generated notes into titled sections at their Markdown headings.
pub fn parse_notes(raw_text: &str, subject: &str, level: &str) -> NotesDocument {
    NotesDocument {
        title: subject.to_string(),
        level: level.to_string(),
        sections: sectionize(raw_text, subject),
        full_text: raw_text.to_string(),
    }
}

/// Returns at most [`MAX_NOTE_SECTIONS`] sections; never empty.
pub fn sectionize(raw_text: &str, fallback_title: &str) -> Vec<NoteSection> {
    let headings: Vec<HeadingSpan> = HEADING
        .captures_iter(raw_text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let title = caps.get(1)?.as_str().trim().trim_end_matches('#').trim_end();
            Some(HeadingSpan {
                title,
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect();

    if headings.is_empty() {
        return vec![NoteSection {
            title: fallback_title.to_string(),
            content: raw_text.to_string(),
        }];
    }

    if headings.len() > MAX_NOTE_SECTIONS {
        log::debug!(
            "Dropping {} note sections beyond the first {}",
            headings.len() - MAX_NOTE_SECTIONS,
            MAX_NOTE_SECTIONS
        );
    }

    headings
        .iter()
        .enumerate()
        .take(MAX_NOTE_SECTIONS)
        .map(|(i, heading)| {
            let content_end = headings
                .get(i + 1)
                .map(|next| next.start)
                .unwrap_or(raw_text.len());
            NoteSection {
                title: heading.title.to_string(),
                content: raw_text[heading.end..content_end].trim().to_string(),
            }
        })
        .collect()
}
