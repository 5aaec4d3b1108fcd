//! Typed extraction from the YAML plan document
//!
//! The plan file is decoded to a generic `serde_yaml::Value` first; the
//! functions here walk that tree and produce the typed domain values in a
//! single pass, appending a [`ConfigWarning`] for every substitution they
//! make. Nothing in here aborts the run - garbage in produces a zeroed,
//! fully-reported default out.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_yaml::Value;

use crate::error::FincastResult;
use crate::models::{Account, Assets, Income};

use super::warning::ConfigWarning;

/// Divisor applied to configured return percentages (5 -> 0.05)
const PERCENT: Decimal = dec!(100);

/// The typed plan, extracted once from the YAML document
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    /// Sum of everything under the `expenses` section
    pub expenses_total: Decimal,
    /// One account per entry under `investments`
    pub accounts: Vec<Account>,
    /// Monthly income from `income.job`
    pub income: Income,
}

impl PlanConfig {
    /// Extract the full plan from a decoded YAML document
    ///
    /// Runs all three extractions and collects every warning they emit.
    /// The input is never mutated.
    pub fn from_yaml(config: &Value) -> (Self, Vec<ConfigWarning>) {
        let mut warnings = Vec::new();

        let expenses_total = total_expenses(config, &mut warnings);
        let accounts = extract_accounts(config, &mut warnings);
        let income = extract_income(config, &mut warnings);

        (
            Self {
                expenses_total,
                accounts,
                income,
            },
            warnings,
        )
    }

    /// Assemble the assets aggregate the projection engine runs on
    ///
    /// The stored monthly expense total is the configured expenses plus the
    /// monthly contributions of every non-pretax account, truncated to a
    /// whole currency unit. After-tax contributions are money already
    /// spoken for, so folding them into expenses keeps the cash-flow rule
    /// from double-counting them.
    pub fn into_assets(self) -> FincastResult<Assets> {
        let mut expenses = self.expenses_total;
        for account in &self.accounts {
            if !account.is_pretax() {
                expenses += account.monthly_contribution;
            }
        }
        let monthly_expenses = expenses.trunc().to_i64().unwrap_or_default();

        Assets::new(self.accounts, monthly_expenses, self.income)
    }
}

/// Sum all numeric values under the `expenses` section
///
/// Non-numeric entries are skipped with a warning; a missing or misshapen
/// section yields zero with a warning.
pub fn total_expenses(config: &Value, warnings: &mut Vec<ConfigWarning>) -> Decimal {
    let Some(expenses) = config.get("expenses").and_then(Value::as_mapping) else {
        warnings.push(ConfigWarning::MissingSection {
            section: "expenses",
        });
        return Decimal::ZERO;
    };

    let mut total = Decimal::ZERO;
    for (label, amount) in expenses {
        match decimal_value(amount) {
            Some(value) => total += value,
            None => warnings.push(ConfigWarning::UnexpectedValueType {
                section: "expenses",
                key: label.as_str().unwrap_or_default().to_string(),
                found: value_type_name(amount),
            }),
        }
    }

    total
}

/// Build one [`Account`] per entry under the `investments` section
///
/// Balance, expected return, and monthly contribution accept integer or
/// decimal representations and default to zero (with a warning) when absent
/// or malformed. The configured `expected_return` is a percentage and is
/// divided by 100 before storage.
pub fn extract_accounts(config: &Value, warnings: &mut Vec<ConfigWarning>) -> Vec<Account> {
    let Some(entries) = config.get("investments").and_then(Value::as_mapping) else {
        warnings.push(ConfigWarning::MissingSection {
            section: "investments",
        });
        return Vec::new();
    };

    let mut accounts = Vec::new();
    for (name, entry) in entries {
        let Some(name) = name.as_str() else {
            warnings.push(ConfigWarning::InvalidAccountName {
                found: value_type_name(name),
            });
            continue;
        };

        if !entry.is_mapping() {
            warnings.push(ConfigWarning::InvalidAccountEntry {
                name: name.to_string(),
                found: value_type_name(entry),
            });
            continue;
        }

        let balance = numeric_field(entry, name, "balance", warnings);
        let expected_return = numeric_field(entry, name, "expected_return", warnings) / PERCENT;
        let monthly_contribution = numeric_field(entry, name, "monthly_contribution", warnings);

        accounts.push(Account::new(
            name,
            balance,
            expected_return,
            monthly_contribution,
        ));
    }

    accounts
}

/// Read the monthly income record from `income.job`
///
/// Both amounts are whole-currency integers. Any missing level or field is
/// reported and substituted with zero; downstream projections are degenerate
/// in that case, but the run still completes.
pub fn extract_income(config: &Value, warnings: &mut Vec<ConfigWarning>) -> Income {
    let Some(income) = config.get("income").filter(|v| v.is_mapping()) else {
        warnings.push(ConfigWarning::MissingSection { section: "income" });
        return Income::default();
    };

    let Some(job) = income.get("job").filter(|v| v.is_mapping()) else {
        warnings.push(ConfigWarning::MissingSection {
            section: "income.job",
        });
        return Income::default();
    };

    let pretax = integer_field(job, "pretax", warnings);
    let aftertax = integer_field(job, "aftertax", warnings);

    Income::new(pretax, aftertax)
}

/// Read a numeric account field, defaulting to zero with a warning
fn numeric_field(
    entry: &Value,
    account: &str,
    field: &'static str,
    warnings: &mut Vec<ConfigWarning>,
) -> Decimal {
    match entry.get(field) {
        None => {
            warnings.push(ConfigWarning::MissingField {
                account: account.to_string(),
                field,
            });
            Decimal::ZERO
        }
        Some(value) => decimal_value(value).unwrap_or_else(|| {
            warnings.push(ConfigWarning::MalformedField {
                account: account.to_string(),
                field,
                found: value_type_name(value),
            });
            Decimal::ZERO
        }),
    }
}

/// Read an integer income field, defaulting to zero with a warning
fn integer_field(record: &Value, field: &'static str, warnings: &mut Vec<ConfigWarning>) -> i64 {
    match record.get(field).and_then(Value::as_i64) {
        Some(amount) => amount,
        None => {
            warnings.push(ConfigWarning::MissingIncome { field });
            0
        }
    }
}

/// Convert a YAML scalar to an exact decimal, if it is numeric
///
/// Integers convert losslessly; floats go through the shortest-roundtrip
/// conversion rust_decimal provides.
fn decimal_value(value: &Value) -> Option<Decimal> {
    if let Some(i) = value.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = value.as_u64() {
        return Some(Decimal::from(u));
    }
    value.as_f64().and_then(Decimal::from_f64)
}

/// Human-readable name of a YAML value's type, for warning messages
fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
