//! Level-payment amortization for a fixed-rate loan
//!
//! All rates passed in as "percent" are whole percentages (4.5 means 4.5%).
//! Balances are floored at zero: once a loan would be overpaid the remaining
//! balance is reported as zero, never as negative debt.

use chrono::{Datelike, NaiveDate};

/// Convert an annual percentage rate into a monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Fixed monthly principal-and-interest payment for a loan
///
/// A zero rate pays the principal off in equal installments.
/// Otherwise: `P * r(1+r)^n / ((1+r)^n - 1)` with `r` monthly and `n` in months.
pub fn compute_monthly_payment(principal: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    let total_months = term_years * 12;
    if total_months == 0 {
        return principal;
    }

    let r = monthly_rate(annual_rate_percent);
    let compound = (1.0 + r).powi(total_months as i32);
    if r == 0.0 || compound == 1.0 {
        return principal / total_months as f64;
    }

    principal * (r * compound) / (compound - 1.0)
}

/// Principal still owed after `months_paid` level payments
///
/// `months_paid` may run past `total_months`; the result stays at zero.
pub fn compute_remaining_balance(
    principal: f64,
    monthly_rate: f64,
    total_months: u32,
    months_paid: u32,
) -> f64 {
    if total_months == 0 {
        return 0.0;
    }

    let growth_n = (1.0 + monthly_rate).powi(total_months as i32);
    if monthly_rate == 0.0 || growth_n == 1.0 {
        let paid = principal / total_months as f64 * months_paid as f64;
        return (principal - paid).max(0.0);
    }

    let growth_p = (1.0 + monthly_rate).powi(months_paid.min(i32::MAX as u32) as i32);
    let balance = principal * ((growth_n - growth_p) / (growth_n - 1.0));
    balance.max(0.0)
}

/// Payments already made on a loan originated on `origination`, as of `as_of`
///
/// Counts whole calendar months between the two dates and subtracts one: the
/// first payment on a mortgage falls due roughly 45 days after closing.
/// Never negative, so a loan closed this month (or later) reports zero payments.
pub fn months_elapsed_since_origination(origination: NaiveDate, as_of: NaiveDate) -> u32 {
    let years = as_of.year() - origination.year();
    let months = as_of.month0() as i32 - origination.month0() as i32;
    let elapsed = years * 12 + months - 1;
    elapsed.max(0) as u32
}
