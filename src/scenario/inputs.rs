//! Validated input snapshot for one projection run

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every input the projection needs, already repaired into range
///
/// Percentages are whole numbers (3.5 means 3.5%). Monthly amounts are in
/// today's dollars and are inflated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInputs {
    /// Original purchase price (cost basis for capital gains)
    pub purchase_price: f64,

    /// What the home would sell for today
    pub current_home_value: f64,

    /// Date the mortgage closed
    pub loan_origination_date: NaiveDate,

    /// Principal borrowed at origination
    pub original_loan_amount: f64,

    /// Annual mortgage interest rate (%)
    pub interest_rate: f64,

    /// Mortgage term in years
    pub mortgage_term_years: u32,

    /// Whether the home is (or recently was) the owner's primary residence
    pub primary_residence: bool,

    pub monthly_hoa: f64,
    pub monthly_property_taxes: f64,
    pub monthly_insurance: f64,
    pub monthly_maintenance: f64,

    /// Rent charged per month at the start of the horizon
    pub monthly_rent: f64,

    /// Annual rent increase (%)
    pub annual_rent_increase: f64,

    /// Property management fee as a share of rent (%)
    pub management_fee: f64,

    /// Marginal tax rate on positive rental profit (%)
    pub rental_income_tax_rate: f64,

    /// Annual home appreciation (%), may be negative
    pub home_appreciation: f64,

    /// Annual inflation of taxes, insurance, HOA and maintenance (%)
    pub cost_inflation: f64,

    /// Agent and closing fees as a share of sale price (%)
    pub selling_fee_rate: f64,

    /// Capital gains tax rate (%)
    pub capital_gains_tax_rate: f64,

    /// Annual return on invested sale proceeds (%)
    pub investment_return: f64,

    /// Number of years to project past today
    pub years_to_hold: u32,
}

impl ScenarioInputs {
    /// Taxes, insurance, HOA and maintenance per month, before inflation
    pub fn monthly_carrying_costs(&self) -> f64 {
        self.monthly_hoa + self.monthly_property_taxes + self.monthly_insurance + self.monthly_maintenance
    }
}
