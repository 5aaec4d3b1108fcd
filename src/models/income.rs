//! Monthly income model
//!
//! Tracks pretax and after-tax monthly income. Only after-tax income is
//! available for spending and for saving into the cash account; pretax
//! income funds the automatic tax-advantaged contribution.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Annual raise applied to after-tax income (2%)
pub const ANNUAL_RAISE_FACTOR: Decimal = dec!(1.02);

/// Monthly income, split by tax treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Income {
    /// Monthly income before tax withholding
    pub pretax: i64,
    /// Monthly take-home income
    pub aftertax: i64,
}

impl Income {
    /// Create a new income record
    pub fn new(pretax: i64, aftertax: i64) -> Self {
        Self { pretax, aftertax }
    }

    /// Apply the yearly 2% raise to after-tax income
    ///
    /// Pretax income is never escalated. The raised amount is truncated back
    /// to a whole currency unit, matching the integer income representation.
    pub fn apply_annual_raise(&mut self) {
        let raised = Decimal::from(self.aftertax) * ANNUAL_RAISE_FACTOR;
        // Truncation can only fail to fit i64 on absurd inputs; keep the old
        // amount rather than panic mid-simulation.
        self.aftertax = raised.trunc().to_i64().unwrap_or(self.aftertax);
    }
}
