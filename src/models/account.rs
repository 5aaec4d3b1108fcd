//! Account model
//!
//! Represents a named balance-holding entity with a growth rate and an
//! optional recurring monthly contribution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Behavior tag for an account
///
/// The projection engine dispatches on this tag rather than on the account
/// name, so the display name stays pure identity. The tag is derived once
/// from the configured name when the account is extracted: `"cash"` becomes
/// [`AccountKind::Cash`], `"401k"` becomes [`AccountKind::TaxAdvantaged`],
/// and everything else is [`AccountKind::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Receives the net monthly cash flow (after-tax income minus expenses)
    Cash,
    /// Funded from pretax income; receives the automatic pretax contribution
    TaxAdvantaged,
    /// No special rule beyond growth and its own contribution
    Generic,
}

impl AccountKind {
    /// Derive the behavior tag from a configured account name
    pub fn from_account_name(name: &str) -> Self {
        match name {
            "cash" => Self::Cash,
            "401k" => Self::TaxAdvantaged,
            _ => Self::Generic,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::TaxAdvantaged => write!(f, "Tax-Advantaged"),
            Self::Generic => write!(f, "Generic"),
        }
    }
}

/// An investment or cash account tracked by the projection
///
/// All monetary fields use exact decimal arithmetic; balances compound over
/// many periods and floating-point drift is not acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account name (e.g., "cash", "401k", "brokerage")
    pub name: String,

    /// Behavior tag derived from the name at extraction time
    pub kind: AccountKind,

    /// Current balance
    pub balance: Decimal,

    /// Annualized expected return as a fraction (0.05 = 5%)
    pub expected_return: Decimal,

    /// Fixed amount added to the balance each month
    pub monthly_contribution: Decimal,
}

impl Account {
    /// Create a new account, deriving its behavior tag from the name
    pub fn new(
        name: impl Into<String>,
        balance: Decimal,
        expected_return: Decimal,
        monthly_contribution: Decimal,
    ) -> Self {
        let name = name.into();
        let kind = AccountKind::from_account_name(&name);
        Self {
            name,
            kind,
            balance,
            expected_return,
            monthly_contribution,
        }
    }

    /// Whether contributions to this account come from pretax income
    ///
    /// Pretax contributions are excluded from the after-tax expense total
    /// when the plan is assembled.
    pub fn is_pretax(&self) -> bool {
        matches!(self.kind, AccountKind::TaxAdvantaged)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
