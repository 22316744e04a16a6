use std::path::Path;

use crate::models::{FieldId, NarrativeRecord, OutputRow, ScalarFields};
use crate::processing::{FormEngine, PdfTextReader};
use crate::utils::ExtractError;

pub struct ReportParser;

impl ReportParser {
    pub fn new() -> Self {
        ReportParser
    }

    /// Extracts one document: PDF to lines, one engine pass, then the
    /// document's scalar fields broadcast onto every narrative record.
    pub fn parse(&self, pdf_path: &Path) -> Result<Vec<OutputRow>, ExtractError> {
        let lines = PdfTextReader::read_lines(pdf_path)?;
        let source_path = pdf_path.display().to_string();
        let subject_name = Self::subject_name(pdf_path);
        Ok(self.parse_lines(&lines, &source_path, &subject_name))
    }

    /// Runs the extraction over an already-materialized line sequence.
    pub fn parse_lines(
        &self,
        lines: &[String],
        source_path: &str,
        subject_name: &str,
    ) -> Vec<OutputRow> {
        let engine = FormEngine::new(lines, source_path, subject_name);
        let (records, fields) = engine.run();
        assemble(records, &fields)
    }

    /// Subject name convention: the part of the file name before the first
    /// hyphen.
    fn subject_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
            .split('-')
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Merges each narrative record with the document's scalar field set, in the
/// fixed column order. No transformation beyond the merge.
fn assemble(records: Vec<NarrativeRecord>, fields: &ScalarFields) -> Vec<OutputRow> {
    let owned = |id: FieldId| fields.get(id).map(str::to_string);
    records
        .into_iter()
        .map(|record| OutputRow {
            category: record.category.label().to_string(),
            statement: record.statement,
            file_path: record.source_path,
            name: record.subject_name,
            days_supervised: owned(FieldId::DaysSupervised),
            days_non_rated: owned(FieldId::DaysNonRated),
            duty_title: owned(FieldId::DutyTitle),
            dafsc: owned(FieldId::Dafsc),
            reason: owned(FieldId::Reason),
            period_start: owned(FieldId::PeriodStart),
            period_end: owned(FieldId::PeriodEnd),
            org: owned(FieldId::Organization),
            location: owned(FieldId::Location),
            ratee_signed: owned(FieldId::RateeSigned),
            rater_name: owned(FieldId::RaterName),
            rater_signed: owned(FieldId::RaterSigned),
            rater_duty_title: owned(FieldId::RaterDutyTitle),
            hlr_name: owned(FieldId::ReviewerName),
            hlr_duty_title: owned(FieldId::ReviewerDutyTitle),
            hlr_signed: owned(FieldId::ReviewerSigned),
            strat: owned(FieldId::Stratification),
            promotion_rec: owned(FieldId::PromotionRecommendation),
            future_role_1: owned(FieldId::FutureRole1),
            future_role_2: owned(FieldId::FutureRole2),
            future_role_3: owned(FieldId::FutureRole3),
        })
        .collect()
}
