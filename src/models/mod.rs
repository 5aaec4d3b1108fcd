//! Core data models for fincast
//!
//! This module contains the data structures that represent the projection
//! domain: accounts, monthly income, and the assets aggregate that the
//! engine steps through time.

pub mod account;
pub mod assets;
pub mod income;

pub use account::{Account, AccountKind};
pub use assets::Assets;
pub use income::Income;
