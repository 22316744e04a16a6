use lazy_static::lazy_static;
use regex::Regex;

use crate::models::rules::RATER_IDENTITY_MARKER;
use crate::models::Section;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

pub struct TextCleaner;

impl TextCleaner {
    /// Strips the section's boilerplate phrases, truncates the
    /// unit-improvement narrative at the rater identity block, and collapses
    /// whitespace.
    pub fn clean(section: Section, raw: &str) -> String {
        let mut text = raw.to_string();
        for phrase in section.boilerplate() {
            text = text.replace(phrase, "");
        }
        if section == Section::ImprovingTheUnit {
            if let Some(pos) = text.find(RATER_IDENTITY_MARKER) {
                text.truncate(pos);
            }
        }
        WHITESPACE.replace_all(&text, " ").trim().to_string()
    }
}
