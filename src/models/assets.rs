//! Assets aggregate
//!
//! The aggregate root the projection engine mutates in place: the list of
//! accounts, the fixed monthly expense total, the monthly income record,
//! and the month counter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{FincastError, FincastResult};

use super::account::Account;
use super::income::Income;

/// A snapshot of everything the projection steps through time
///
/// Constructed once from the extracted plan, then mutated in place for the
/// full run. No account is added or removed after construction;
/// `monthly_expenses` is fixed, and only the income record (annually) and
/// the month counter (monthly) change during stepping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assets {
    /// All tracked accounts
    pub accounts: Vec<Account>,

    /// Total monthly expenses, derived once at setup
    pub monthly_expenses: i64,

    /// Monthly income; after-tax portion escalates yearly
    pub monthly_income: Income,

    /// Number of months simulated so far
    pub months_invested: u32,
}

impl Assets {
    /// Create an assets aggregate, enforcing unique account names
    ///
    /// Names double as display identity, so duplicates would make the
    /// projection output ambiguous.
    pub fn new(
        accounts: Vec<Account>,
        monthly_expenses: i64,
        monthly_income: Income,
    ) -> FincastResult<Self> {
        let mut seen = HashSet::new();
        for account in &accounts {
            if !seen.insert(account.name.as_str()) {
                return Err(FincastError::Validation(format!(
                    "Duplicate account name: {}",
                    account.name
                )));
            }
        }

        Ok(Self {
            accounts,
            monthly_expenses,
            monthly_income,
            months_invested: 0,
        })
    }

    /// Sum of all account balances
    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(|a| a.balance).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_assets() {
        let accounts = vec![
            Account::new("cash", dec!(1000), dec!(0), dec!(0)),
            Account::new("401k", dec!(5000), dec!(0.06), dec!(200)),
        ];
        let assets = Assets::new(accounts, 2500, Income::new(4000, 3000)).unwrap();

        assert_eq!(assets.accounts.len(), 2);
        assert_eq!(assets.monthly_expenses, 2500);
        assert_eq!(assets.months_invested, 0);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let accounts = vec![
            Account::new("cash", dec!(1000), dec!(0), dec!(0)),
            Account::new("cash", dec!(500), dec!(0), dec!(0)),
        ];
        let result = Assets::new(accounts, 0, Income::default());

        assert!(matches!(result, Err(FincastError::Validation(_))));
    }

    #[test]
    fn test_total_balance() {
        let accounts = vec![
            Account::new("cash", dec!(1000.25), dec!(0), dec!(0)),
            Account::new("brokerage", dec!(2499.75), dec!(0.07), dec!(0)),
        ];
        let assets = Assets::new(accounts, 0, Income::default()).unwrap();

        assert_eq!(assets.total_balance(), dec!(3500));
    }

    #[test]
    fn test_total_balance_empty() {
        let assets = Assets::new(Vec::new(), 0, Income::default()).unwrap();
        assert_eq!(assets.total_balance(), Decimal::ZERO);
    }
}
