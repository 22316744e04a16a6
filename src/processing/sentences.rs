use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{NarrativeRecord, Section};

// Reversible placeholder guarding literal periods through the split.
const DOT: &str = "__DOT__";

lazy_static! {
    static ref TITLE_ABBREVIATION: Regex = Regex::new(r"\b(Dr|Mr|Ms)\.").unwrap();
    // A sentence terminator immediately followed by whitespace.
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Breaks cleaned narrative text into one record per sentence. The final
    /// review section is emitted as a single unsplit record.
    pub fn split(
        section: Section,
        text: &str,
        source_path: &str,
        subject_name: &str,
    ) -> Vec<NarrativeRecord> {
        let record = |statement: String| NarrativeRecord {
            category: section,
            statement,
            source_path: source_path.to_string(),
            subject_name: subject_name.to_string(),
        };

        if section.is_final_review() {
            return vec![record(text.to_string())];
        }

        let protected = Self::protect_periods(text);
        let mut records = Vec::new();
        for piece in Self::split_at_terminators(&protected) {
            let restored = piece.replace(DOT, ".");
            let sentence = restored.trim();
            if sentence.is_empty() {
                continue;
            }
            let mut sentence = sentence.to_string();
            if !sentence.ends_with(&['.', '!', '?'][..]) {
                sentence.push('.');
            }
            records.push(record(sentence));
        }
        records
    }

    /// Substitutes placeholders for periods that are not sentence breaks:
    /// title abbreviations, "U.S.", and decimals like "1.4".
    fn protect_periods(text: &str) -> String {
        let text = text.replace("U.S.", "U__DOT__S__DOT__");
        let text = TITLE_ABBREVIATION.replace_all(&text, "${1}__DOT__");

        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        for (i, &c) in chars.iter().enumerate() {
            let between_digits = c == '.'
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).map_or(false, |n| n.is_ascii_digit());
            if between_digits {
                out.push_str(DOT);
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Splits after each terminator-then-whitespace boundary, keeping the
    /// terminator with the preceding piece and dropping the whitespace.
    fn split_at_terminators(text: &str) -> Vec<&str> {
        let mut pieces = Vec::new();
        let mut start = 0;
        for m in SENTENCE_BREAK.find_iter(text) {
            pieces.push(&text[start..m.start() + 1]);
            start = m.end();
        }
        pieces.push(&text[start..]);
        pieces
    }
}
