//! Projection report
//!
//! Captures the final account state after a run, with an aligned terminal
//! table and a JSON form for machine consumption.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::{FincastError, FincastResult};
use crate::models::{AccountKind, Assets};

/// One account's final state
#[derive(Debug, Clone, Serialize)]
pub struct AccountRow {
    /// Account name
    pub name: String,
    /// Behavior tag
    pub kind: AccountKind,
    /// Final balance
    pub balance: Decimal,
    /// Monthly contribution
    pub monthly_contribution: Decimal,
    /// Annualized return as a fraction
    pub expected_return: Decimal,
}

/// Final state of a projection run
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport {
    /// Number of months simulated
    pub months: u32,
    /// Monthly expense total the run used
    pub monthly_expenses: i64,
    /// Final state of every account
    pub accounts: Vec<AccountRow>,
    /// Sum of final balances, truncated per account for display
    pub total_balance: i64,
}

impl ProjectionReport {
    /// Build a report from the post-run assets
    pub fn new(assets: &Assets, months: u32) -> Self {
        let accounts: Vec<AccountRow> = assets
            .accounts
            .iter()
            .map(|account| AccountRow {
                name: account.name.clone(),
                kind: account.kind,
                balance: account.balance,
                monthly_contribution: account.monthly_contribution,
                expected_return: account.expected_return,
            })
            .collect();

        // Each balance is coerced to a whole unit before summing, matching
        // the display convention for the headline figure.
        let total_balance = accounts
            .iter()
            .map(|row| row.balance.trunc().to_i64().unwrap_or_default())
            .sum();

        Self {
            months,
            monthly_expenses: assets.monthly_expenses,
            accounts,
            total_balance,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Projection after {} months\n", self.months));
        output.push_str(&format!(
            "Monthly expenses: {}\n\n",
            self.monthly_expenses
        ));

        if self.accounts.is_empty() {
            output.push_str("No accounts found.\n");
            return output;
        }

        // Calculate column widths
        let name_width = self
            .accounts
            .iter()
            .map(|row| row.name.len())
            .max()
            .unwrap_or(4)
            .max(4);

        let kind_width = self
            .accounts
            .iter()
            .map(|row| row.kind.to_string().len())
            .max()
            .unwrap_or(4)
            .max(4);

        // Header
        output.push_str(&format!(
            "{:<name_width$}  {:<kind_width$}  {:>14}  {:>14}  {:>8}\n",
            "Name",
            "Kind",
            "Balance",
            "Contribution",
            "Return",
            name_width = name_width,
            kind_width = kind_width,
        ));

        // Separator line
        output.push_str(&format!(
            "{:-<name_width$}  {:-<kind_width$}  {:->14}  {:->14}  {:->8}\n",
            "",
            "",
            "",
            "",
            "",
            name_width = name_width,
            kind_width = kind_width,
        ));

        // Account rows
        for row in &self.accounts {
            output.push_str(&format!(
                "{:<name_width$}  {:<kind_width$}  {:>14}  {:>14}  {:>7}%\n",
                row.name,
                row.kind.to_string(),
                row.balance.round_dp(2).to_string(),
                row.monthly_contribution.round_dp(2).to_string(),
                (row.expected_return * dec!(100)).normalize().to_string(),
                name_width = name_width,
                kind_width = kind_width,
            ));
        }

        // Total row
        output.push_str(&format!(
            "{:-<name_width$}  {:-<kind_width$}  {:->14}\n",
            "",
            "",
            "",
            name_width = name_width,
            kind_width = kind_width,
        ));
        output.push_str(&format!(
            "{:<name_width$}  {:<kind_width$}  {:>14}\n",
            "Total",
            "",
            self.total_balance,
            name_width = name_width,
            kind_width = kind_width,
        ));

        output
    }

    /// Serialize the report to pretty-printed JSON
    pub fn to_json(&self) -> FincastResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FincastError::Config(format!("Failed to serialize report: {}", e)))
    }
}
