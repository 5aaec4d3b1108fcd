//! Structured extraction warnings
//!
//! Every defaulting decision made while extracting the plan is recorded as
//! one of these values instead of being printed from inside the library.

use std::fmt;

/// A non-fatal problem found while extracting the plan configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A whole section is absent or has the wrong shape
    MissingSection { section: &'static str },

    /// An expense entry holds a non-numeric value and was skipped
    UnexpectedValueType {
        section: &'static str,
        key: String,
        found: &'static str,
    },

    /// An investment entry key is not a string; the entry was skipped
    InvalidAccountName { found: &'static str },

    /// An investment entry is not a mapping; the entry was skipped
    InvalidAccountEntry { name: String, found: &'static str },

    /// A numeric account field is absent; zero was substituted
    MissingField {
        account: String,
        field: &'static str,
    },

    /// A numeric account field has the wrong type; zero was substituted
    MalformedField {
        account: String,
        field: &'static str,
        found: &'static str,
    },

    /// An income amount is absent or non-integer; projections degenerate
    MissingIncome { field: &'static str },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSection { section } => {
                write!(f, "No '{}' section found in plan", section)
            }
            Self::UnexpectedValueType {
                section,
                key,
                found,
            } => {
                write!(
                    f,
                    "Skipped '{}' entry '{}': expected a number, found {}",
                    section, key, found
                )
            }
            Self::InvalidAccountName { found } => {
                write!(f, "Skipped investment with non-string name ({})", found)
            }
            Self::InvalidAccountEntry { name, found } => {
                write!(
                    f,
                    "Skipped investment '{}': expected a mapping, found {}",
                    name, found
                )
            }
            Self::MissingField { account, field } => {
                write!(f, "Account '{}' has no '{}'; using 0", account, field)
            }
            Self::MalformedField {
                account,
                field,
                found,
            } => {
                write!(
                    f,
                    "Account '{}' field '{}' is not numeric (found {}); using 0",
                    account, field, found
                )
            }
            Self::MissingIncome { field } => {
                write!(
                    f,
                    "No '{}' income configured; projecting with 0 income",
                    field
                )
            }
        }
    }
}
