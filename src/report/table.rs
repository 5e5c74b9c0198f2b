//! Per-year table: formatted rows, terminal rendering and CSV export

use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;

use super::format::format_currency;
use crate::error::Result;
use crate::projection::{BetterOption, ProjectionResult, YearResult};

/// One formatted table row; `better_option` drives row styling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Home Value")]
    pub home_value: String,
    #[serde(rename = "Loan Balance")]
    pub loan_balance: String,
    #[serde(rename = "Equity")]
    pub equity: String,
    #[serde(rename = "Monthly Rent")]
    pub monthly_rent: String,
    #[serde(rename = "Monthly Expenses")]
    pub monthly_expenses: String,
    #[serde(rename = "Rental Cash Flow")]
    pub net_rental_cash_flow: String,
    #[serde(rename = "Cumulative Cash Flow")]
    pub cumulative_rental_cash_flow: String,
    #[serde(rename = "Selling Costs")]
    pub selling_costs: String,
    #[serde(rename = "Capital Gains Tax")]
    pub capital_gains_tax: String,
    #[serde(rename = "Net Sale Proceeds")]
    pub net_sale_proceeds: String,
    #[serde(rename = "Hold Net Worth")]
    pub hold_net_worth: String,
    #[serde(rename = "Sell & Invest")]
    pub sell_value: String,
    #[serde(rename = "Better Option")]
    pub better_option: BetterOption,
}

impl From<&YearResult> for TableRow {
    fn from(row: &YearResult) -> Self {
        Self {
            year: row.year,
            home_value: format_currency(row.home_value),
            loan_balance: format_currency(row.loan_balance),
            equity: format_currency(row.equity),
            monthly_rent: format_currency(row.monthly.rent),
            monthly_expenses: format_currency(row.monthly.total_expenses),
            net_rental_cash_flow: format_currency(row.net_rental_cash_flow),
            cumulative_rental_cash_flow: format_currency(row.cumulative_rental_cash_flow),
            selling_costs: format_currency(row.selling_costs),
            capital_gains_tax: format_currency(row.capital_gains_tax),
            net_sale_proceeds: format_currency(row.net_sale_proceeds),
            hold_net_worth: format_currency(row.hold_net_worth),
            sell_value: format_currency(row.sell_value),
            better_option: row.better_option,
        }
    }
}

pub fn table_rows(result: &ProjectionResult) -> Vec<TableRow> {
    result.years.iter().map(TableRow::from).collect()
}

/// Write the table, header first, as CSV
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in table_rows(result) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Fixed-width text table for a terminal
pub fn render_table(result: &ProjectionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} {:>14} {:>14} {:>14} {:>10} {:>10} {:>14} {:>14} {:>14} {:>14} {:>6}",
        "Year",
        "Home Value",
        "Loan Balance",
        "Equity",
        "Rent/mo",
        "Costs/mo",
        "Cash Flow",
        "Net Proceeds",
        "Hold",
        "Sell",
        "Better"
    );
    let _ = writeln!(out, "{}", "-".repeat(142));

    for row in table_rows(result) {
        let _ = writeln!(
            out,
            "{:>4} {:>14} {:>14} {:>14} {:>10} {:>10} {:>14} {:>14} {:>14} {:>14} {:>6}",
            row.year,
            row.home_value,
            row.loan_balance,
            row.equity,
            row.monthly_rent,
            row.monthly_expenses,
            row.cumulative_rental_cash_flow,
            row.net_sale_proceeds,
            row.hold_net_worth,
            row.sell_value,
            row.better_option.as_str(),
        );
    }
    out
}
