use crate::models::FieldId;

/// Marker line that closes the reviewer section early. The reviewer's own
/// statement is the last three buffered lines before this marker.
pub const REVIEWER_IDENTITY_MARKER: &str =
    "HIGHER LEVEL REVIEWER NAME, GRADE, AND BRANCH OF SERVICE";

/// Marker line announcing the three numbered future-role lines.
pub const FUTURE_ROLES_MARKER: &str = "FUTURE ROLES";

/// The unit-improvement narrative runs into the rater identity block without
/// a clean line break; everything at and after this marker is discarded.
pub const RATER_IDENTITY_MARKER: &str = "RATER NAME, GRADE, AND BRANCH OF SERVICE";

/// How the value is read once an anchor label matches a line.
#[derive(Debug, Clone, Copy)]
pub enum CaptureRule {
    /// The next line, trimmed. When the next line carries the given marker
    /// the field belongs to an empty box and captures the empty string.
    NextLine { empty_marker: Option<&'static str> },
    /// The next line is a comma-delimited signature record; the date is the
    /// fourth comma field, validated. Same empty-box marker handling.
    SignatureDate { empty_marker: Option<&'static str> },
    /// The next line holds two dates separated by "THRU", validated
    /// independently into `PeriodStart` and `PeriodEnd`.
    PeriodRange,
    /// The first run of digits on the next line.
    FirstNumber,
}

/// A label phrase whose presence on a line signals that a field's value is
/// on the following line.
#[derive(Debug, Clone, Copy)]
pub struct AnchorRule {
    pub label: &'static str,
    pub field: FieldId,
    pub rule: CaptureRule,
}

/// Anchor vocabulary in check order. Checks are independent predicates: more
/// than one anchor may fire on the same line (e.g. "RATER DUTY TITLE" also
/// matches the "DUTY TITLE" anchor).
pub const ANCHORS: [AnchorRule; 17] = [
    AnchorRule {
        label: "HIGHER LEVEL REVIEWER DUTY TITLE",
        field: FieldId::ReviewerDutyTitle,
        rule: CaptureRule::NextLine { empty_marker: None },
    },
    AnchorRule {
        label: "HIGHER LEVEL REVIEWER NAME, GRADE, AND BRANCH OF SERVICE",
        field: FieldId::ReviewerName,
        rule: CaptureRule::NextLine { empty_marker: None },
    },
    AnchorRule {
        label: "RATER NAME, GRADE, AND BRANCH OF SERVICE",
        field: FieldId::RaterName,
        rule: CaptureRule::NextLine { empty_marker: None },
    },
    AnchorRule {
        label: "HIGHER LEVEL REVIEWER SIGNATURE",
        field: FieldId::ReviewerSigned,
        rule: CaptureRule::SignatureDate {
            empty_marker: Some("HIGHER LEVEL REVIEWER DUTY TITLE"),
        },
    },
    AnchorRule {
        label: "RATER SIGNATURE",
        field: FieldId::RaterSigned,
        rule: CaptureRule::SignatureDate { empty_marker: None },
    },
    AnchorRule {
        label: "RATER DUTY TITLE",
        field: FieldId::RaterDutyTitle,
        rule: CaptureRule::NextLine { empty_marker: None },
    },
    AnchorRule {
        label: "RATEE ACKNOWLEDGEMENT",
        field: FieldId::RateeSigned,
        rule: CaptureRule::SignatureDate {
            empty_marker: Some("ORGANIZATION AND COMMAND"),
        },
    },
    AnchorRule {
        label: "STRATIFICATION",
        field: FieldId::Stratification,
        rule: CaptureRule::NextLine {
            empty_marker: Some("FORCED ENDORSEMENT"),
        },
    },
    AnchorRule {
        label: "PROMOTION RECOMMENDATION",
        field: FieldId::PromotionRecommendation,
        rule: CaptureRule::NextLine {
            empty_marker: Some("RATER ASSESSMENT"),
        },
    },
    AnchorRule {
        label: "DAYS SUPERVISED",
        field: FieldId::DaysSupervised,
        rule: CaptureRule::FirstNumber,
    },
    AnchorRule {
        label: "DAYS NON-RATED",
        field: FieldId::DaysNonRated,
        rule: CaptureRule::FirstNumber,
    },
    AnchorRule {
        label: "DUTY TITLE",
        field: FieldId::DutyTitle,
        rule: CaptureRule::NextLine {
            empty_marker: Some("DAFSC"),
        },
    },
    AnchorRule {
        label: "DAFSC",
        field: FieldId::Dafsc,
        rule: CaptureRule::NextLine { empty_marker: None },
    },
    AnchorRule {
        label: "REASON",
        field: FieldId::Reason,
        rule: CaptureRule::NextLine { empty_marker: None },
    },
    AnchorRule {
        label: "ORGANIZATION AND COMMAND",
        field: FieldId::Organization,
        rule: CaptureRule::NextLine { empty_marker: None },
    },
    AnchorRule {
        label: "LOCATION",
        field: FieldId::Location,
        rule: CaptureRule::NextLine { empty_marker: None },
    },
    AnchorRule {
        label: "PERIOD",
        field: FieldId::PeriodStart,
        rule: CaptureRule::PeriodRange,
    },
];
