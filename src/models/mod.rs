pub mod data;
pub mod rules;

pub use data::{FieldId, NarrativeRecord, OutputRow, ScalarFields, Section, COLUMNS};
