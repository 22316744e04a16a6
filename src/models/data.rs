use std::collections::BTreeMap;

use serde::Serialize;

/// The six narrative divisions of the form, in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    DutyDescription,
    ExecutingTheMission,
    LeadingPeople,
    ManagingResources,
    ImprovingTheUnit,
    HigherLevelReviewerAssessment,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::DutyDescription,
        Section::ExecutingTheMission,
        Section::LeadingPeople,
        Section::ManagingResources,
        Section::ImprovingTheUnit,
        Section::HigherLevelReviewerAssessment,
    ];

    /// The literal header prefix that opens this section on the form.
    pub fn label(&self) -> &'static str {
        match self {
            Section::DutyDescription => "DUTY DESCRIPTION",
            Section::ExecutingTheMission => "EXECUTING THE MISSION",
            Section::LeadingPeople => "LEADING PEOPLE",
            Section::ManagingResources => "MANAGING RESOURCES",
            Section::ImprovingTheUnit => "IMPROVING THE UNIT",
            Section::HigherLevelReviewerAssessment => "HIGHER LEVEL REVIEWER ASSESSMENT",
        }
    }

    /// Static instructional text printed inside this section that must be
    /// stripped from captured narrative.
    pub fn boilerplate(&self) -> &'static [&'static str] {
        match self {
            Section::DutyDescription => &["RATER ASSESSMENT"],
            Section::ExecutingTheMission => &[
                "EFFECTIVELY USES KNOWLEDGE, INITIATIVE, AND ADAPTABILITY TO PRODUCE TIMELY, HIGH QUALITY/QUANTITY RESULTS TO POSITIVELY IMPACT THE MISSION",
            ],
            Section::LeadingPeople => &[
                "FOSTERS COHESIVE TEAMS, EFFECTIVELY COMMUNICATES, AND USES EMOTIONAL INTELLIGENCE TO TAKE CARE OF PEOPLE AND ACCOMPLISH THE MISSION",
            ],
            Section::ManagingResources => &[
                "MANAGES ASSIGNED RESOURCES EFFECTIVELY AND TAKES RESPONSIBILITY FOR ACTIONS/BEHAVIORS TO MAXIMIZE ORGANIZATIONAL PERFORMANCE",
            ],
            Section::ImprovingTheUnit => &[
                "DEMONSTRATES CRITICAL THINKING AND FOSTERS INNOVATION TO FIND CREATIVE SOLUTIONS AND IMPROVE MISSION EXECUTION",
            ],
            Section::HigherLevelReviewerAssessment => &["RATER SIGNATURE"],
        }
    }

    /// The reviewer block is a short free-form statement, not multi-sentence
    /// narrative, and is never sentence-split.
    pub fn is_final_review(&self) -> bool {
        matches!(self, Section::HigherLevelReviewerAssessment)
    }
}

/// One sentence (or, for the reviewer block, one statement) captured from a
/// narrative section.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeRecord {
    pub category: Section,
    pub statement: String,
    pub source_path: String,
    pub subject_name: String,
}

/// Identifier for each single-value field captured once per document.
/// Variant order is the output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    DaysSupervised,
    DaysNonRated,
    DutyTitle,
    Dafsc,
    Reason,
    PeriodStart,
    PeriodEnd,
    Organization,
    Location,
    RateeSigned,
    RaterName,
    RaterSigned,
    RaterDutyTitle,
    ReviewerName,
    ReviewerDutyTitle,
    ReviewerSigned,
    Stratification,
    PromotionRecommendation,
    FutureRole1,
    FutureRole2,
    FutureRole3,
}

impl FieldId {
    pub const ALL: [FieldId; 21] = [
        FieldId::DaysSupervised,
        FieldId::DaysNonRated,
        FieldId::DutyTitle,
        FieldId::Dafsc,
        FieldId::Reason,
        FieldId::PeriodStart,
        FieldId::PeriodEnd,
        FieldId::Organization,
        FieldId::Location,
        FieldId::RateeSigned,
        FieldId::RaterName,
        FieldId::RaterSigned,
        FieldId::RaterDutyTitle,
        FieldId::ReviewerName,
        FieldId::ReviewerDutyTitle,
        FieldId::ReviewerSigned,
        FieldId::Stratification,
        FieldId::PromotionRecommendation,
        FieldId::FutureRole1,
        FieldId::FutureRole2,
        FieldId::FutureRole3,
    ];
}

#[derive(Debug, Clone, Default)]
pub struct FieldSlot {
    pub captured: bool,
    pub value: Option<String>,
}

/// Per-document scalar fields, keyed uniformly so every capture follows the
/// same first-match-wins rule.
#[derive(Debug, Clone)]
pub struct ScalarFields {
    slots: BTreeMap<FieldId, FieldSlot>,
}

impl ScalarFields {
    pub fn new() -> Self {
        let slots = FieldId::ALL
            .iter()
            .map(|&id| (id, FieldSlot::default()))
            .collect();
        ScalarFields { slots }
    }

    pub fn is_captured(&self, id: FieldId) -> bool {
        self.slots.get(&id).map_or(false, |slot| slot.captured)
    }

    /// Records a capture attempt. The slot is marked captured even when the
    /// value is unset, so later occurrences of the same anchor are ignored.
    pub fn capture(&mut self, id: FieldId, value: Option<String>) {
        if let Some(slot) = self.slots.get_mut(&id) {
            if slot.captured {
                return;
            }
            slot.captured = true;
            slot.value = value;
        }
    }

    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.slots.get(&id).and_then(|slot| slot.value.as_deref())
    }
}

impl Default for ScalarFields {
    fn default() -> Self {
        Self::new()
    }
}

/// Column names of the flat output table, in order.
pub const COLUMNS: [&str; 25] = [
    "Category",
    "Statement",
    "file_path",
    "Name",
    "days_supervised",
    "days_non_rated",
    "duty_title",
    "dafsc",
    "reason",
    "period_start",
    "period_end",
    "org",
    "location",
    "ratee_signed",
    "rater_name",
    "rater_signed",
    "rater_duty_title",
    "HLR_name",
    "HLR_duty_title",
    "HLR_signed",
    "strat",
    "promotion_rec",
    "future_role_1",
    "future_role_2",
    "future_role_3",
];

/// One flat output row: a narrative record plus the document's scalar fields.
/// Unset scalars serialize as empty cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Statement")]
    pub statement: String,
    #[serde(rename = "file_path")]
    pub file_path: String,
    #[serde(rename = "Name")]
    pub name: String,
    pub days_supervised: Option<String>,
    pub days_non_rated: Option<String>,
    pub duty_title: Option<String>,
    pub dafsc: Option<String>,
    pub reason: Option<String>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub org: Option<String>,
    pub location: Option<String>,
    pub ratee_signed: Option<String>,
    pub rater_name: Option<String>,
    pub rater_signed: Option<String>,
    pub rater_duty_title: Option<String>,
    #[serde(rename = "HLR_name")]
    pub hlr_name: Option<String>,
    #[serde(rename = "HLR_duty_title")]
    pub hlr_duty_title: Option<String>,
    #[serde(rename = "HLR_signed")]
    pub hlr_signed: Option<String>,
    pub strat: Option<String>,
    pub promotion_rec: Option<String>,
    pub future_role_1: Option<String>,
    pub future_role_2: Option<String>,
    pub future_role_3: Option<String>,
}

impl OutputRow {
    /// Flattens the row into cells matching [`COLUMNS`].
    pub fn cells(&self) -> Vec<String> {
        let unset = |value: &Option<String>| value.clone().unwrap_or_default();
        vec![
            self.category.clone(),
            self.statement.clone(),
            self.file_path.clone(),
            self.name.clone(),
            unset(&self.days_supervised),
            unset(&self.days_non_rated),
            unset(&self.duty_title),
            unset(&self.dafsc),
            unset(&self.reason),
            unset(&self.period_start),
            unset(&self.period_end),
            unset(&self.org),
            unset(&self.location),
            unset(&self.ratee_signed),
            unset(&self.rater_name),
            unset(&self.rater_signed),
            unset(&self.rater_duty_title),
            unset(&self.hlr_name),
            unset(&self.hlr_duty_title),
            unset(&self.hlr_signed),
            unset(&self.strat),
            unset(&self.promotion_rec),
            unset(&self.future_role_1),
            unset(&self.future_role_2),
            unset(&self.future_role_3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_capture_wins() {
        let mut fields = ScalarFields::new();
        fields.capture(FieldId::DutyTitle, Some("Flight Chief".to_string()));
        fields.capture(FieldId::DutyTitle, Some("Section Chief".to_string()));
        assert_eq!(fields.get(FieldId::DutyTitle), Some("Flight Chief"));
    }

    #[test]
    fn test_unset_capture_still_blocks_later_matches() {
        let mut fields = ScalarFields::new();
        fields.capture(FieldId::Reason, None);
        assert!(fields.is_captured(FieldId::Reason));
        fields.capture(FieldId::Reason, Some("Annual".to_string()));
        assert_eq!(fields.get(FieldId::Reason), None);
    }

    #[test]
    fn test_section_header_labels_are_distinct_prefixes() {
        for a in Section::ALL.iter() {
            for b in Section::ALL.iter() {
                if a != b {
                    assert!(!a.label().starts_with(b.label()));
                }
            }
        }
    }

    #[test]
    fn test_cells_match_column_count() {
        let row = OutputRow {
            category: Section::LeadingPeople.label().to_string(),
            statement: "Led the team.".to_string(),
            file_path: "/tmp/a.pdf".to_string(),
            name: "Smith".to_string(),
            days_supervised: Some("365".to_string()),
            days_non_rated: None,
            duty_title: None,
            dafsc: None,
            reason: None,
            period_start: None,
            period_end: None,
            org: None,
            location: None,
            ratee_signed: None,
            rater_name: None,
            rater_signed: None,
            rater_duty_title: None,
            hlr_name: None,
            hlr_duty_title: None,
            hlr_signed: None,
            strat: None,
            promotion_rec: None,
            future_role_1: None,
            future_role_2: None,
            future_role_3: None,
        };
        let cells = row.cells();
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[4], "365");
        assert_eq!(cells[5], "");
    }
}
