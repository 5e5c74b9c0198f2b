//! Output structures for a hold-versus-sell projection

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which path ends the year ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetterOption {
    Hold,
    Sell,
}

impl BetterOption {
    /// Strictly greater wins for hold; ties go to sell
    pub fn compare(hold_net_worth: f64, sell_value: f64) -> Self {
        if hold_net_worth > sell_value {
            BetterOption::Hold
        } else {
            BetterOption::Sell
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BetterOption::Hold => "hold",
            BetterOption::Sell => "sell",
        }
    }
}

impl fmt::Display for BetterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monthly figures for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdown {
    /// Rent charged per month this year
    pub rent: f64,

    /// Property management fee per month
    pub management_fee: f64,

    /// Principal and interest plus inflated taxes, insurance, HOA and maintenance
    pub total_expenses: f64,
}

/// One year of the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearResult {
    /// Years from today (0 is the decision point)
    pub year: u32,

    pub home_value: f64,
    pub loan_balance: f64,
    pub equity: f64,

    /// After-tax rental cash flow for this year; always 0 at year 0
    pub net_rental_cash_flow: f64,

    /// Rental cash flow summed over years 1..=year
    pub cumulative_rental_cash_flow: f64,

    /// Sale proceeds after tax plus cumulative rental cash flow
    pub hold_net_worth: f64,

    pub selling_costs: f64,

    /// Sale price minus purchase price (no improvements basis)
    pub capital_gain: f64,

    pub capital_gains_tax: f64,

    /// Sale price minus loan balance and selling costs, before tax
    pub pre_tax_sale_proceeds: f64,

    /// What a sale this year would put in hand after tax
    pub net_sale_proceeds: f64,

    /// Year-0 after-tax proceeds invested until this year
    pub sell_value: f64,

    pub better_option: BetterOption,

    pub monthly: MonthlyBreakdown,
}

impl YearResult {
    pub fn is_underwater(&self) -> bool {
        self.pre_tax_sale_proceeds < 0.0
    }

    /// Hold net worth minus the sell trajectory (positive favors holding)
    pub fn advantage(&self) -> f64 {
        self.hold_net_worth - self.sell_value
    }
}

/// Complete projection: one row per year, year 0 first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Reference date the projection was run as of
    pub as_of: NaiveDate,

    pub years: Vec<YearResult>,
}

impl ProjectionResult {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            years: Vec::new(),
        }
    }

    /// Append the next year's row
    pub fn add_row(&mut self, row: YearResult) {
        self.years.push(row);
    }

    pub fn final_year(&self) -> Option<&YearResult> {
        self.years.last()
    }

    /// End-of-horizon comparison, read from the final year only
    pub fn summary(&self) -> Option<ProjectionSummary> {
        let last = self.final_year()?;

        Some(ProjectionSummary {
            years_held: last.year,
            hold_net_worth: last.hold_net_worth,
            sell_value: last.sell_value,
            difference: last.advantage(),
            better_option: last.better_option,
        })
    }
}

/// End-of-horizon comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub years_held: u32,
    pub hold_net_worth: f64,
    pub sell_value: f64,
    /// Hold minus sell
    pub difference: f64,
    pub better_option: BetterOption,
}
