//! Fixed-rate mortgage math: level payment, remaining balance, payments made

mod amortization;
mod loan;

pub use amortization::{
    compute_monthly_payment, compute_remaining_balance, months_elapsed_since_origination,
    monthly_rate,
};
pub use loan::LoanTerms;
