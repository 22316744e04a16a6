// Label-anchored scalar field capture.
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::models::rules::{AnchorRule, CaptureRule, ANCHORS};
use crate::models::{FieldId, ScalarFields};
use crate::validation::DateValidator;

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();
}

/// Returns the first maximal run of decimal digits in the text, if any.
/// No sign, decimal point, or separator handling.
pub fn extract_number(text: &str) -> Option<String> {
    DIGIT_RUN.find(text).map(|m| m.as_str().to_string())
}

/// Runs every anchor against the line. Each anchor is an independent check;
/// several may fire on one line. A firing anchor consumes its slot even when
/// the captured value ends up unset, so only the first occurrence in the
/// document counts. `next_line` is `None` at end of input, which captures
/// unset rather than failing.
pub fn apply_anchors(line: &str, next_line: Option<&str>, fields: &mut ScalarFields) {
    for anchor in ANCHORS.iter() {
        if fields.is_captured(anchor.field) || !line.contains(anchor.label) {
            continue;
        }
        apply_anchor(anchor, next_line, fields);
    }
}

fn apply_anchor(anchor: &AnchorRule, next_line: Option<&str>, fields: &mut ScalarFields) {
    match anchor.rule {
        CaptureRule::NextLine { empty_marker } => {
            let value = next_line.map(|next| match empty_marker {
                Some(marker) if next.contains(marker) => String::new(),
                _ => next.trim().to_string(),
            });
            fields.capture(anchor.field, value);
        }
        CaptureRule::SignatureDate { empty_marker } => {
            let value = next_line.and_then(|next| signature_date(anchor.label, next, empty_marker));
            fields.capture(anchor.field, value);
        }
        CaptureRule::FirstNumber => {
            fields.capture(anchor.field, next_line.and_then(extract_number));
        }
        CaptureRule::PeriodRange => {
            let (start, end) = next_line.map(period_range).unwrap_or((None, None));
            fields.capture(FieldId::PeriodStart, start);
            fields.capture(FieldId::PeriodEnd, end);
        }
    }
}

/// Pulls the signed date out of a comma-delimited signature record: the
/// fourth comma field, trailing backslash stripped, validated. When the next
/// line is itself the given marker label the signature box was empty and the
/// capture is the empty string.
fn signature_date(label: &str, next: &str, empty_marker: Option<&str>) -> Option<String> {
    if let Some(marker) = empty_marker {
        if next.contains(marker) {
            return Some(String::new());
        }
    }
    let parts: Vec<&str> = next.trim().split(',').collect();
    if parts.len() <= 3 {
        return None;
    }
    let date = parts[3].trim().trim_end_matches('\\');
    if DateValidator::is_valid(date) {
        Some(date.to_string())
    } else {
        warn!("invalid signed date after {:?}: {:?}", label, date);
        None
    }
}

/// Splits "start THRU end" and validates each side independently.
fn period_range(next: &str) -> (Option<String>, Option<String>) {
    match next.trim().split_once("THRU") {
        Some((start, end)) => (validated_date(start), validated_date(end)),
        None => (None, None),
    }
}

fn validated_date(raw: &str) -> Option<String> {
    let date = raw.trim();
    if DateValidator::is_valid(date) {
        Some(date.to_string())
    } else {
        warn!("invalid period date: {:?}", date);
        None
    }
}
