//! fincast - Command-line personal finance projection tool
//!
//! This library provides the core functionality for the fincast projection
//! tool. Given a YAML snapshot of accounts, monthly expenses, and monthly
//! income, it simulates the evolution of account balances month by month,
//! applying compounded growth, recurring contributions, income-linked
//! top-ups, and an annual income escalation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Extraction of typed plan values from a YAML document
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, income, the assets aggregate)
//! - `projection`: The month-stepping projection engine
//! - `display`: Report formatting for terminal and JSON output
//!
//! # Example
//!
//! ```rust,ignore
//! use fincast::config::PlanConfig;
//! use fincast::projection;
//!
//! let doc: serde_yaml::Value = serde_yaml::from_str(&plan_text)?;
//! let (plan, warnings) = PlanConfig::from_yaml(&doc);
//! let mut assets = plan.into_assets()?;
//! projection::run(&mut assets, 14);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod projection;

pub use error::FincastError;
