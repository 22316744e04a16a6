pub mod cleaner;
pub mod engine;
pub mod fields;
pub mod pdf;
pub mod sentences;

pub use cleaner::TextCleaner;
pub use engine::FormEngine;
pub use pdf::PdfTextReader;
pub use sentences::SentenceSplitter;
