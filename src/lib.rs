pub mod dataset;
pub mod models;
pub mod output;
pub mod processing;
pub mod report_parser;
pub mod utils;
pub mod validation;

pub use report_parser::ReportParser;
