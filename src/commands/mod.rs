//! Command implementations

pub mod check;
pub mod hints;
pub mod simple;
pub mod survey;

pub use check::{CheckEntry, CheckResult, check_words};
pub use hints::{HintsResult, find_hints};
pub use simple::{play_lines, run_simple};
pub use survey::{RootSummary, SurveyResult, survey_roots};
