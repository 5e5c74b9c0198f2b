//! The one loan on the property, resolved to monthly terms

use super::amortization::{compute_monthly_payment, compute_remaining_balance, monthly_rate};

/// Loan terms fixed at origination plus the payments already made today
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub principal: f64,
    pub monthly_rate: f64,
    pub total_months: u32,
    /// Level principal-and-interest payment; never escalated
    pub monthly_payment: f64,
    /// Payments made before projection year 0
    pub months_paid: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: u32, months_paid: u32) -> Self {
        Self {
            principal,
            monthly_rate: monthly_rate(annual_rate_percent),
            total_months: term_years * 12,
            monthly_payment: compute_monthly_payment(principal, annual_rate_percent, term_years),
            months_paid,
        }
    }

    /// Remaining balance `years` whole years after today
    pub fn balance_after_years(&self, years: u32) -> f64 {
        compute_remaining_balance(
            self.principal,
            self.monthly_rate,
            self.total_months,
            self.months_paid.saturating_add(years * 12),
        )
    }

    pub fn is_paid_off_after(&self, years: u32) -> bool {
        self.months_paid.saturating_add(years * 12) >= self.total_months
    }
}
