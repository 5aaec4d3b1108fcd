//! Report formatting
//!
//! Formats the final projection state for terminal output and JSON export.

pub mod report;

pub use report::{AccountRow, ProjectionReport};
