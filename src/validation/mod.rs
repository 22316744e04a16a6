pub mod date;

pub use date::DateValidator;
