use std::collections::VecDeque;

use crate::models::rules::{FUTURE_ROLES_MARKER, REVIEWER_IDENTITY_MARKER};
use crate::models::{FieldId, NarrativeRecord, ScalarFields, Section};
use crate::processing::fields;
use crate::processing::{SentenceSplitter, TextCleaner};

// The reviewer statement is recovered from the lines just before the
// identity marker; five lines of buffer comfortably cover the three kept.
const RECENT_BUFFER: usize = 5;
const REVIEWER_STATEMENT_LINES: usize = 3;

/// Forward-only line cursor with bounded peek. Peeking past the end returns
/// `None`, so lookahead at end of input is a defined unset outcome.
struct LineCursor<'a> {
    lines: &'a [String],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(lines: &'a [String]) -> Self {
        LineCursor { lines, pos: 0 }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.pos)?;
        self.pos += 1;
        Some(line)
    }

    /// The line `ahead` positions past the one most recently returned.
    fn peek(&self, ahead: usize) -> Option<&'a str> {
        self.lines.get(self.pos + ahead - 1).map(|x| x.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum EngineState {
    /// Before the first header, or after the reviewer section closed early.
    NoSection,
    InSection(Section),
}

/// One-pass extraction state machine for a single document. Walks the
/// linearized line sequence, segments narrative sections, and captures the
/// document's scalar fields along the way.
pub struct FormEngine<'a> {
    cursor: LineCursor<'a>,
    state: EngineState,
    accumulated: Vec<String>,
    recent: VecDeque<String>,
    fields: ScalarFields,
    records: Vec<NarrativeRecord>,
    source_path: String,
    subject_name: String,
}

impl<'a> FormEngine<'a> {
    pub fn new(lines: &'a [String], source_path: &str, subject_name: &str) -> Self {
        FormEngine {
            cursor: LineCursor::new(lines),
            state: EngineState::NoSection,
            accumulated: Vec::new(),
            recent: VecDeque::new(),
            fields: ScalarFields::new(),
            records: Vec::new(),
            source_path: source_path.to_string(),
            subject_name: subject_name.to_string(),
        }
    }

    /// Consumes the document and returns its narrative records and scalar
    /// field set.
    pub fn run(mut self) -> (Vec<NarrativeRecord>, ScalarFields) {
        while let Some(line) = self.cursor.next_line() {
            self.process_line(line);
        }
        self.flush_section();
        (self.records, self.fields)
    }

    fn process_line(&mut self, line: &str) {
        // A header line short-circuits everything else for that line.
        if self.try_section_header(line) {
            return;
        }
        // A boilerplate line is skipped entirely, anchors included.
        if self.is_boilerplate(line) {
            return;
        }

        match self.state {
            EngineState::InSection(section) if section.is_final_review() => {
                self.process_review_line(section, line);
            }
            EngineState::InSection(_) => {
                self.accumulated.push(line.trim().to_string());
            }
            EngineState::NoSection => {}
        }

        fields::apply_anchors(line, self.cursor.peek(1), &mut self.fields);
    }

    /// Opens a new section when the line starts with a registered label,
    /// flushing the previous one. The remainder of the header line seeds the
    /// new section's text.
    fn try_section_header(&mut self, line: &str) -> bool {
        for &section in Section::ALL.iter() {
            if let Some(rest) = line.strip_prefix(section.label()) {
                self.flush_section();
                self.state = EngineState::InSection(section);
                self.accumulated = vec![rest.trim().to_string()];
                self.recent.clear();
                return true;
            }
        }
        false
    }

    fn is_boilerplate(&self, line: &str) -> bool {
        match self.state {
            EngineState::InSection(section) => section
                .boilerplate()
                .iter()
                .any(|phrase| line.contains(phrase)),
            EngineState::NoSection => false,
        }
    }

    /// Inside the reviewer section the narrative is not accumulated
    /// directly: lines roll through a small buffer until the reviewer
    /// identity marker closes the section, and the statement becomes the
    /// last three buffered lines. The future-roles marker instead reads the
    /// three numbered lines that follow it.
    fn process_review_line(&mut self, section: Section, line: &str) {
        if line.contains(REVIEWER_IDENTITY_MARKER) {
            let kept = self.recent.len().saturating_sub(REVIEWER_STATEMENT_LINES);
            let statement: Vec<String> = self.recent.iter().skip(kept).cloned().collect();
            self.flush_statement(section, &statement.join(" "));
            // No further narrative accumulates for this document.
            self.state = EngineState::NoSection;
            self.accumulated.clear();
            self.recent.clear();
        } else if line.contains(FUTURE_ROLES_MARKER) {
            self.capture_future_roles();
        } else {
            self.recent.push_back(line.trim().to_string());
            while self.recent.len() > RECENT_BUFFER {
                self.recent.pop_front();
            }
        }
    }

    fn capture_future_roles(&mut self) {
        let roles = [
            (FieldId::FutureRole1, "1."),
            (FieldId::FutureRole2, "2."),
            (FieldId::FutureRole3, "3."),
        ];
        for (ahead, (field, numeral)) in roles.into_iter().enumerate() {
            let value = self.cursor.peek(ahead + 1).and_then(|next| {
                next.trim()
                    .split_once(numeral)
                    .map(|(_, rest)| rest.trim().to_string())
            });
            self.fields.capture(field, value);
        }
    }

    fn flush_section(&mut self) {
        if let EngineState::InSection(section) = self.state {
            if !self.accumulated.is_empty() {
                let joined = self.accumulated.join(" ");
                self.flush_statement(section, &joined);
            }
        }
    }

    fn flush_statement(&mut self, section: Section, raw: &str) {
        let cleaned = TextCleaner::clean(section, raw);
        self.records.extend(SentenceSplitter::split(
            section,
            &cleaned,
            &self.source_path,
            &self.subject_name,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    fn run(raw: &[&str]) -> (Vec<NarrativeRecord>, ScalarFields) {
        let lines = lines(raw);
        FormEngine::new(&lines, "/tmp/a.pdf", "Smith").run()
    }

    #[test]
    fn test_section_narrative_is_split_and_fields_captured() {
        let (records, fields) = run(&[
            "DUTY TITLE",
            "Flight Chief",
            "DAFSC",
            "3F5X1",
            "EXECUTING THE MISSION",
            "Excels at planning. Leads with clarity.",
        ]);
        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|r| r.category == Section::ExecutingTheMission));
        assert_eq!(records[0].statement, "Excels at planning.");
        assert_eq!(records[1].statement, "Leads with clarity.");
        assert_eq!(fields.get(FieldId::DutyTitle), Some("Flight Chief"));
        assert_eq!(fields.get(FieldId::Dafsc), Some("3F5X1"));
    }

    #[test]
    fn test_first_duty_title_anchor_wins() {
        let (_, fields) = run(&["DUTY TITLE", "Flight Chief", "DUTY TITLE", "Section Chief"]);
        assert_eq!(fields.get(FieldId::DutyTitle), Some("Flight Chief"));
    }

    #[test]
    fn test_header_remainder_seeds_section_text() {
        let (records, _) = run(&["LEADING PEOPLE Mentored five airmen."]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].statement, "Mentored five airmen.");
    }

    #[test]
    fn test_multi_line_accumulation_joins_with_spaces() {
        let (records, _) = run(&[
            "MANAGING RESOURCES",
            "Managed a $1.2M account",
            "across two sites. Cut waste by 10%.",
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].statement,
            "Managed a $1.2M account across two sites."
        );
        assert_eq!(records[1].statement, "Cut waste by 10%.");
    }

    #[test]
    fn test_boilerplate_line_is_dropped_from_narrative() {
        let (records, _) = run(&[
            "EXECUTING THE MISSION",
            "EFFECTIVELY USES KNOWLEDGE, INITIATIVE, AND ADAPTABILITY TO PRODUCE TIMELY, HIGH QUALITY/QUANTITY RESULTS TO POSITIVELY IMPACT THE MISSION",
            "Delivered 40 sorties.",
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].statement, "Delivered 40 sorties.");
    }

    #[test]
    fn test_boilerplate_line_also_skips_anchor_checks() {
        // Inside the reviewer section "RATER SIGNATURE" is boilerplate, so
        // the anchor sharing that line never fires.
        let (_, fields) = run(&[
            "HIGHER LEVEL REVIEWER ASSESSMENT",
            "RATER SIGNATURE",
            "DOE, JOHN A, SMSGT, 12 Mar 24\\",
        ]);
        assert!(!fields.is_captured(FieldId::RaterSigned));
    }

    #[test]
    fn test_rater_signature_captures_outside_review_section() {
        let (_, fields) = run(&["RATER SIGNATURE", "DOE, JOHN A, SMSGT, 12 Mar 24\\"]);
        assert_eq!(fields.get(FieldId::RaterSigned), Some("12 Mar 24"));
    }

    #[test]
    fn test_review_section_closes_early_with_last_three_lines() {
        let (records, fields) = run(&[
            "HIGHER LEVEL REVIEWER ASSESSMENT",
            "Stale line one",
            "Stale line two",
            "Absolutely superb airman.",
            "My #1 of 12 flight chiefs.",
            "Promote now.",
            "HIGHER LEVEL REVIEWER NAME, GRADE, AND BRANCH OF SERVICE",
            "DOE, JANE, CMSGT, USAF",
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].statement,
            "Absolutely superb airman. My #1 of 12 flight chiefs. Promote now."
        );
        // The marker line itself anchors the reviewer name.
        assert_eq!(
            fields.get(FieldId::ReviewerName),
            Some("DOE, JANE, CMSGT, USAF")
        );
    }

    #[test]
    fn test_review_section_without_marker_emits_no_buffered_statement() {
        let (records, _) = run(&[
            "HIGHER LEVEL REVIEWER ASSESSMENT",
            "Superb airman.",
            "Promote now.",
        ]);
        // The buffered lines are never flushed; only the empty header
        // remainder survives as the section statement.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].statement, "");
    }

    #[test]
    fn test_future_roles_capture() {
        let (_, fields) = run(&[
            "HIGHER LEVEL REVIEWER ASSESSMENT",
            "FUTURE ROLES: next assignments",
            "1. Superintendent, Operations",
            "2. First Sergeant",
            "3. Career Field Manager",
        ]);
        assert_eq!(
            fields.get(FieldId::FutureRole1),
            Some("Superintendent, Operations")
        );
        assert_eq!(fields.get(FieldId::FutureRole2), Some("First Sergeant"));
        assert_eq!(
            fields.get(FieldId::FutureRole3),
            Some("Career Field Manager")
        );
    }

    #[test]
    fn test_future_roles_at_end_of_input_are_unset() {
        let (_, fields) = run(&["HIGHER LEVEL REVIEWER ASSESSMENT", "FUTURE ROLES"]);
        assert!(fields.is_captured(FieldId::FutureRole1));
        assert_eq!(fields.get(FieldId::FutureRole1), None);
        assert_eq!(fields.get(FieldId::FutureRole2), None);
        assert_eq!(fields.get(FieldId::FutureRole3), None);
    }

    #[test]
    fn test_period_anchor_splits_and_validates() {
        let (_, fields) = run(&["PERIOD OF REPORT", "1 Feb 23 THRU 31 Jan 24"]);
        assert_eq!(fields.get(FieldId::PeriodStart), Some("1 Feb 23"));
        assert_eq!(fields.get(FieldId::PeriodEnd), Some("31 Jan 24"));
    }

    #[test]
    fn test_days_anchors_use_number_extraction() {
        let (_, fields) = run(&[
            "DAYS SUPERVISED",
            "187 of 365",
            "DAYS NON-RATED",
            "no entry",
        ]);
        assert_eq!(fields.get(FieldId::DaysSupervised), Some("187"));
        assert!(fields.is_captured(FieldId::DaysNonRated));
        assert_eq!(fields.get(FieldId::DaysNonRated), None);
    }

    #[test]
    fn test_anchor_on_last_line_is_guarded() {
        let (_, fields) = run(&["ORGANIZATION AND COMMAND"]);
        assert!(fields.is_captured(FieldId::Organization));
        assert_eq!(fields.get(FieldId::Organization), None);
    }

    #[test]
    fn test_empty_box_markers_capture_empty_string() {
        let (_, fields) = run(&[
            "DUTY TITLE",
            "DAFSC",
            "3F5X1",
        ]);
        assert_eq!(fields.get(FieldId::DutyTitle), Some(""));
        assert_eq!(fields.get(FieldId::Dafsc), Some("3F5X1"));
    }
}
