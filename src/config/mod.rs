//! Plan configuration extraction
//!
//! Turns a decoded YAML document into the typed values the projection engine
//! consumes. Extraction never fails: missing sections and malformed values
//! are defaulted and reported as structured warnings so the caller decides
//! how to surface them.

pub mod extract;
pub mod warning;

pub use extract::{extract_accounts, extract_income, total_expenses, PlanConfig};
pub use warning::ConfigWarning;
