//! Projection engine
//!
//! Advances the assets aggregate month by month, mutating balances and
//! income in place according to fixed financial rules. The engine is pure
//! and deterministic: no randomness, no I/O, no failure mode. Garbage
//! inputs produce deterministic garbage outputs; validation belongs to the
//! extraction layer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{AccountKind, Assets};

/// Automatic pretax contribution rate for tax-advantaged accounts
/// (8.5% of monthly pretax income). Fixed policy, not configuration.
pub const AUTO_PRETAX_RATE: Decimal = dec!(0.085);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Run the projection for exactly `months` monthly steps
///
/// Mutates `assets` in place. There is no early termination: negative
/// balances and zero income propagate silently.
pub fn run(assets: &mut Assets, months: u32) {
    for _ in 0..months {
        step_month(assets);
    }
}

/// Advance the aggregate by one month
///
/// Per account, in order: monthly-compounded growth, the account's own
/// contribution, then the kind-specific top-up. The growth rule is the
/// annual rate divided evenly across 12 months - a deliberate
/// simplification, not a geometric monthly-rate conversion.
fn step_month(assets: &mut Assets) {
    let net_cash_flow =
        Decimal::from(assets.monthly_income.aftertax - assets.monthly_expenses);
    let auto_pretax = Decimal::from(assets.monthly_income.pretax) * AUTO_PRETAX_RATE;

    for account in &mut assets.accounts {
        account.balance += account.balance * account.expected_return / MONTHS_PER_YEAR;
        account.balance += account.monthly_contribution;

        match account.kind {
            // The full monthly surplus or deficit lands in cash; no floor
            // at zero, a deficit is allowed to push the balance negative.
            AccountKind::Cash => account.balance += net_cash_flow,
            // Additional to the account's own contribution field.
            AccountKind::TaxAdvantaged => account.balance += auto_pretax,
            AccountKind::Generic => {}
        }
    }

    assets.months_invested += 1;

    // Yearly 2% raise to after-tax income. The +1 makes this fire on month
    // indices 11, 23, 35, ... - preserved as-is from the original policy.
    if (assets.months_invested + 1) % 12 == 0 {
        assets.monthly_income.apply_annual_raise();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Income};
    use rust_decimal_macros::dec;

    fn single_account(account: Account, income: Income, expenses: i64) -> Assets {
        Assets::new(vec![account], expenses, income).unwrap()
    }

    #[test]
    fn test_generic_account_one_month() {
        let account = Account::new("brokerage", dec!(1000), dec!(0.05), dec!(100));
        let mut assets = single_account(account, Income::new(4000, 3000), 2500);

        run(&mut assets, 1);

        let expected = dec!(1000) + dec!(1000) * dec!(0.05) / dec!(12) + dec!(100);
        assert_eq!(assets.accounts[0].balance, expected);
    }

    #[test]
    fn test_zero_months_is_identity() {
        let account = Account::new("brokerage", dec!(1234.56), dec!(0.07), dec!(50));
        let mut assets = single_account(account, Income::new(4000, 3000), 2500);
        let before = assets.clone();

        run(&mut assets, 0);

        assert_eq!(assets, before);
    }

    #[test]
    fn test_cash_receives_net_flow() {
        let account = Account::new("cash", dec!(1000), dec!(0), dec!(0));
        let mut assets = single_account(account, Income::new(0, 3000), 2500);

        run(&mut assets, 1);

        assert_eq!(assets.accounts[0].balance, dec!(1500));
    }

    #[test]
    fn test_cash_deficit_goes_negative() {
        let account = Account::new("cash", dec!(100), dec!(0), dec!(0));
        let mut assets = single_account(account, Income::new(0, 2000), 2500);

        run(&mut assets, 1);

        assert_eq!(assets.accounts[0].balance, dec!(-400));
    }

    #[test]
    fn test_tax_advantaged_auto_contribution() {
        let account = Account::new("401k", dec!(0), dec!(0), dec!(100));
        let mut assets = single_account(account, Income::new(4000, 0), 0);

        run(&mut assets, 1);

        // Own contribution plus 8.5% of pretax income
        assert_eq!(assets.accounts[0].balance, dec!(100) + dec!(340));
    }

    #[test]
    fn test_months_invested_counter() {
        let mut assets = Assets::new(Vec::new(), 0, Income::default()).unwrap();

        run(&mut assets, 7);

        assert_eq!(assets.months_invested, 7);
    }

    #[test]
    fn test_raise_fires_on_eleventh_month() {
        let mut assets = Assets::new(Vec::new(), 0, Income::new(4000, 3000)).unwrap();

        run(&mut assets, 10);
        assert_eq!(assets.monthly_income.aftertax, 3000);

        // (10 + 1) + 1 = 12, so the raise lands on the 11th step
        run(&mut assets, 1);
        assert_eq!(assets.monthly_income.aftertax, 3060);
        assert_eq!(assets.monthly_income.pretax, 4000);
    }

    #[test]
    fn test_raise_once_per_cycle() {
        let mut assets = Assets::new(Vec::new(), 0, Income::new(4000, 3000)).unwrap();

        // Months 1..=22: exactly one raise (month 11)
        run(&mut assets, 22);
        assert_eq!(assets.monthly_income.aftertax, 3060);

        // Month 23: second raise, 3060 * 1.02 = 3121.2 truncated
        run(&mut assets, 1);
        assert_eq!(assets.monthly_income.aftertax, 3121);
        assert_eq!(assets.monthly_income.pretax, 4000);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let accounts = vec![
            Account::new("cash", dec!(1000), dec!(0), dec!(0)),
            Account::new("401k", dec!(5000), dec!(0.06), dec!(200)),
        ];
        let mut assets = Assets::new(accounts, 2500, Income::new(4000, 3000)).unwrap();

        run(&mut assets, 1);

        // cash: 1000 + 0 growth + 0 contribution + (3000 - 2500)
        assert_eq!(assets.accounts[0].balance, dec!(1500));
        // 401k: 5000 + 5000*0.06/12 + 200 + 4000*0.085 = 5565
        assert_eq!(assets.accounts[1].balance, dec!(5565));
    }

    #[test]
    fn test_update_order_growth_before_contribution() {
        // Growth applies to the opening balance only; the contribution is
        // added afterwards and does not compound within the month.
        let account = Account::new("brokerage", dec!(1200), dec!(0.12), dec!(600));
        let mut assets = single_account(account, Income::default(), 0);

        run(&mut assets, 1);

        // 1200 + 1200*0.12/12 + 600 = 1812 (not (1200+600)*1.01 + ...)
        assert_eq!(assets.accounts[0].balance, dec!(1812));
    }

    #[test]
    fn test_multi_month_compounding() {
        let account = Account::new("brokerage", dec!(1000), dec!(0.06), dec!(0));
        let mut assets = single_account(account, Income::default(), 0);

        run(&mut assets, 2);

        let month_rate = dec!(0.06) / dec!(12);
        let after_one = dec!(1000) + dec!(1000) * month_rate;
        let expected = after_one + after_one * month_rate;
        assert_eq!(assets.accounts[0].balance, expected);
    }
}
