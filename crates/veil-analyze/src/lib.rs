pub mod fetch;
pub mod impact;
pub mod keyword;
pub mod report;

pub use report::Analyzer;
