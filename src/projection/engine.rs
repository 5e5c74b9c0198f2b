//! Year-by-year projection of holding (and renting) versus selling today

use chrono::{Local, NaiveDate};
use log::{debug, trace};

use super::results::{BetterOption, MonthlyBreakdown, ProjectionResult, YearResult};
use super::state::ProjectionState;
use crate::mortgage::{months_elapsed_since_origination, LoanTerms};
use crate::scenario::ScenarioInputs;

/// Gain excluded from tax on a primary residence sale
pub const PRIMARY_RESIDENCE_EXEMPTION: f64 = 500_000.0;

/// Years after today a sale still qualifies for the exemption.
/// Stands in for the 2-of-5-years occupancy test; move-out dates are not tracked.
pub const EXEMPTION_WINDOW_YEARS: u32 = 3;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Reference "today"; only used to count mortgage payments already made
    pub as_of: NaiveDate,
}

impl ProjectionConfig {
    pub fn as_of(as_of: NaiveDate) -> Self {
        Self { as_of }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            as_of: Local::now().date_naive(),
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Loan as it stands on the reference date
    pub fn loan_terms(&self, inputs: &ScenarioInputs) -> LoanTerms {
        let months_paid =
            months_elapsed_since_origination(inputs.loan_origination_date, self.config.as_of);
        LoanTerms::new(
            inputs.original_loan_amount,
            inputs.interest_rate,
            inputs.mortgage_term_years,
            months_paid,
        )
    }

    /// Project years 0..=years_to_hold in a single forward pass
    pub fn project(&self, inputs: &ScenarioInputs) -> ProjectionResult {
        let loan = self.loan_terms(inputs);
        let mut result = ProjectionResult::new(self.config.as_of);
        let mut state = ProjectionState::new();

        debug!(
            "projecting {} years as of {}: {} payments made, P&I {:.2}/month",
            inputs.years_to_hold, self.config.as_of, loan.months_paid, loan.monthly_payment
        );

        for year in 0..=inputs.years_to_hold {
            let row = self.calculate_year(inputs, &loan, year, &mut state);
            result.add_row(row);
        }

        if let Some(summary) = result.summary() {
            debug!(
                "after {} years: hold {:.2}, sell {:.2} -> {}",
                summary.years_held, summary.hold_net_worth, summary.sell_value, summary.better_option
            );
        }

        result
    }

    /// Derive one year from the inputs and the state carried so far
    ///
    /// Years must be fed in order starting at 0; year 0 fixes the sell baseline.
    pub fn calculate_year(
        &self,
        inputs: &ScenarioInputs,
        loan: &LoanTerms,
        year: u32,
        state: &mut ProjectionState,
    ) -> YearResult {
        let home_value = grow(inputs.current_home_value, inputs.home_appreciation, year);
        let loan_balance = loan.balance_after_years(year);
        let equity = home_value - loan_balance;

        // Rent growth starts after the first full year of renting
        let rent = grow(inputs.monthly_rent, inputs.annual_rent_increase, year.saturating_sub(1));
        let carrying_costs = grow(inputs.monthly_carrying_costs(), inputs.cost_inflation, year);
        let monthly_expenses = loan.monthly_payment + carrying_costs;
        let monthly_management_fee = rent * inputs.management_fee / 100.0;

        let annual_cash_flow = rental_cash_flow(
            rent * 12.0,
            monthly_management_fee * 12.0,
            monthly_expenses * 12.0,
            inputs.rental_income_tax_rate,
        );
        let net_rental_cash_flow = if year == 0 { 0.0 } else { annual_cash_flow };
        let cumulative_rental_cash_flow = state.record_cash_flow(year, net_rental_cash_flow);

        let selling_costs = home_value * inputs.selling_fee_rate / 100.0;
        let pre_tax_sale_proceeds = home_value - loan_balance - selling_costs;
        let capital_gain = home_value - inputs.purchase_price;
        let capital_gains_tax = capital_gains_tax(
            capital_gain,
            pre_tax_sale_proceeds,
            inputs.primary_residence,
            year,
            inputs.capital_gains_tax_rate,
        );
        let net_sale_proceeds = pre_tax_sale_proceeds - capital_gains_tax;

        if year == 0 {
            state.capture_baseline(net_sale_proceeds);
        }
        let sell_value = state.sell_value(year, inputs.investment_return);

        // At the decision point positive proceeds are not shown as cashed out,
        // but an underwater position still shows its loss
        let hold_net_worth = if year == 0 && net_sale_proceeds > 0.0 {
            0.0
        } else {
            net_sale_proceeds + cumulative_rental_cash_flow
        };

        trace!(
            "year {}: value {:.2}, balance {:.2}{}, cash flow {:.2}, hold {:.2}, sell {:.2}",
            year,
            home_value,
            loan_balance,
            if loan.is_paid_off_after(year) { " (paid off)" } else { "" },
            net_rental_cash_flow,
            hold_net_worth,
            sell_value
        );

        YearResult {
            year,
            home_value,
            loan_balance,
            equity,
            net_rental_cash_flow,
            cumulative_rental_cash_flow,
            hold_net_worth,
            selling_costs,
            capital_gain,
            capital_gains_tax,
            pre_tax_sale_proceeds,
            net_sale_proceeds,
            sell_value,
            better_option: BetterOption::compare(hold_net_worth, sell_value),
            monthly: MonthlyBreakdown {
                rent,
                management_fee: monthly_management_fee,
                total_expenses: monthly_expenses,
            },
        }
    }
}

/// Run a one-off projection as of `as_of`
pub fn project(inputs: &ScenarioInputs, as_of: NaiveDate) -> ProjectionResult {
    ProjectionEngine::new(ProjectionConfig::as_of(as_of)).project(inputs)
}

/// Compound `base` at `rate_percent` for `years` years
fn grow(base: f64, rate_percent: f64, years: u32) -> f64 {
    base * (1.0 + rate_percent / 100.0).powi(years as i32)
}

/// Annual rental profit after income tax
///
/// Losses are not taxed and earn no tax benefit.
pub fn rental_cash_flow(
    annual_rent: f64,
    annual_management_fee: f64,
    annual_ownership_costs: f64,
    tax_rate_percent: f64,
) -> f64 {
    let profit = annual_rent - annual_management_fee - annual_ownership_costs;
    let tax = if profit > 0.0 { profit * tax_rate_percent / 100.0 } else { 0.0 };
    profit - tax
}

/// Capital gains tax owed on a sale in `year`
///
/// Simplified rules, not tax law: no tax when there is no gain or when the
/// sale does not cover the loan and fees; a primary residence sold within
/// [`EXEMPTION_WINDOW_YEARS`] excludes [`PRIMARY_RESIDENCE_EXEMPTION`] of gain.
pub fn capital_gains_tax(
    capital_gain: f64,
    pre_tax_sale_proceeds: f64,
    primary_residence: bool,
    year: u32,
    tax_rate_percent: f64,
) -> f64 {
    if capital_gain <= 0.0 || pre_tax_sale_proceeds < 0.0 {
        return 0.0;
    }

    let taxable_gain = if primary_residence && year <= EXEMPTION_WINDOW_YEARS {
        (capital_gain - PRIMARY_RESIDENCE_EXEMPTION).max(0.0)
    } else {
        capital_gain
    };
    taxable_gain * tax_rate_percent / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Months;
    use proptest::prelude::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// $400k rental bought for $300k, 10 years into a 30-year 4% loan
    fn rental_inputs() -> ScenarioInputs {
        ScenarioInputs {
            purchase_price: 300_000.0,
            current_home_value: 400_000.0,
            loan_origination_date: as_of() - Months::new(120),
            original_loan_amount: 240_000.0,
            interest_rate: 4.0,
            mortgage_term_years: 30,
            primary_residence: false,
            monthly_hoa: 0.0,
            monthly_property_taxes: 0.0,
            monthly_insurance: 0.0,
            monthly_maintenance: 0.0,
            monthly_rent: 2_000.0,
            annual_rent_increase: 3.0,
            management_fee: 0.0,
            rental_income_tax_rate: 0.0,
            home_appreciation: 3.0,
            cost_inflation: 0.0,
            selling_fee_rate: 6.0,
            capital_gains_tax_rate: 15.0,
            investment_return: 5.0,
            years_to_hold: 1,
        }
    }

    #[test]
    fn test_reference_rental_scenario() {
        let result = project(&rental_inputs(), as_of());
        assert_eq!(result.years.len(), 2);

        let y0 = &result.years[0];
        assert_eq!(y0.home_value, 400_000.0);
        assert_relative_eq!(y0.selling_costs, 24_000.0, epsilon = 1e-9);
        assert_relative_eq!(y0.capital_gain, 100_000.0, epsilon = 1e-9);
        assert_relative_eq!(y0.capital_gains_tax, 15_000.0, epsilon = 1e-9);

        let y1 = &result.years[1];
        assert_relative_eq!(y1.home_value, 412_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_reference_scenario_loan_and_cash_flow() {
        let result = project(&rental_inputs(), as_of());
        let y0 = &result.years[0];
        let y1 = &result.years[1];

        // 120 calendar months since closing, first payment a month later
        let loan = ProjectionEngine::new(ProjectionConfig::as_of(as_of())).loan_terms(&rental_inputs());
        assert_eq!(loan.months_paid, 119);
        assert_relative_eq!(y0.loan_balance, loan.balance_after_years(0));
        assert_relative_eq!(y0.equity, 400_000.0 - y0.loan_balance);

        // Year 1 rent is not yet escalated; P&I is the only cost
        assert_eq!(y1.monthly.rent, 2_000.0);
        let expected = (2_000.0 - loan.monthly_payment) * 12.0;
        assert_relative_eq!(y1.net_rental_cash_flow, expected, epsilon = 1e-6);
        assert_relative_eq!(y1.cumulative_rental_cash_flow, expected, epsilon = 1e-6);

        let baseline = y0.net_sale_proceeds;
        assert!(baseline > 0.0);
        assert_eq!(y0.sell_value, baseline);
        assert_relative_eq!(y1.sell_value, baseline * 1.05, epsilon = 1e-6);
        assert_relative_eq!(y1.hold_net_worth, y1.net_sale_proceeds + expected, epsilon = 1e-6);
    }

    #[test]
    fn test_year_zero_hides_positive_proceeds() {
        let result = project(&rental_inputs(), as_of());
        let y0 = &result.years[0];

        assert!(y0.net_sale_proceeds > 0.0);
        assert_eq!(y0.hold_net_worth, 0.0);
        assert_eq!(y0.net_rental_cash_flow, 0.0);
        assert_eq!(y0.cumulative_rental_cash_flow, 0.0);
        assert_eq!(y0.better_option, BetterOption::Sell);
    }

    #[test]
    fn test_underwater_sale_owes_no_tax_and_stays_flat() {
        // Simplification: an underwater sale owes no capital gains tax even with a gain
        let inputs = ScenarioInputs {
            purchase_price: 200_000.0,
            current_home_value: 250_000.0,
            loan_origination_date: as_of(),
            original_loan_amount: 245_000.0,
            home_appreciation: -5.0,
            years_to_hold: 6,
            ..rental_inputs()
        };
        let result = project(&inputs, as_of());
        let y0 = &result.years[0];

        assert!(y0.capital_gain > 0.0);
        assert!(y0.is_underwater());
        assert_eq!(y0.capital_gains_tax, 0.0);

        // Underwater at the decision point: the real loss is shown
        assert!(y0.net_sale_proceeds < 0.0);
        assert_eq!(y0.hold_net_worth, y0.net_sale_proceeds);

        for row in &result.years {
            assert_eq!(row.sell_value, y0.net_sale_proceeds);
        }
    }

    #[test]
    fn test_primary_residence_exemption_window_approximation() {
        // Exemption applies through year 3 only, regardless of actual occupancy
        let inputs = ScenarioInputs {
            purchase_price: 100_000.0,
            current_home_value: 800_000.0,
            original_loan_amount: 0.0,
            primary_residence: true,
            home_appreciation: 0.0,
            years_to_hold: 5,
            ..rental_inputs()
        };
        let result = project(&inputs, as_of());

        for row in &result.years[..=3] {
            assert_relative_eq!(row.capital_gains_tax, 200_000.0 * 0.15, epsilon = 1e-6);
        }
        for row in &result.years[4..] {
            assert_relative_eq!(row.capital_gains_tax, 700_000.0 * 0.15, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_exemption_can_cover_whole_gain() {
        assert_eq!(capital_gains_tax(400_000.0, 500_000.0, true, 2, 20.0), 0.0);
        assert_eq!(capital_gains_tax(400_000.0, 500_000.0, false, 2, 20.0), 80_000.0);
        assert_eq!(capital_gains_tax(-50_000.0, 500_000.0, false, 2, 20.0), 0.0);
        assert_eq!(capital_gains_tax(50_000.0, -1.0, false, 2, 20.0), 0.0);
    }

    #[test]
    fn test_rental_losses_are_not_taxed() {
        assert_eq!(rental_cash_flow(24_000.0, 0.0, 30_000.0, 25.0), -6_000.0);
        assert_eq!(rental_cash_flow(24_000.0, 2_000.0, 12_000.0, 25.0), 7_500.0);
    }

    #[test]
    fn test_rent_escalates_from_year_two() {
        let inputs = ScenarioInputs { years_to_hold: 3, ..rental_inputs() };
        let result = project(&inputs, as_of());
        let rents: Vec<f64> = result.years.iter().map(|r| r.monthly.rent).collect();

        assert_eq!(rents[0], 2_000.0);
        assert_eq!(rents[1], 2_000.0);
        assert_relative_eq!(rents[2], 2_060.0, epsilon = 1e-9);
        assert_relative_eq!(rents[3], 2_121.8, epsilon = 1e-9);
    }

    #[test]
    fn test_carrying_costs_inflate_but_payment_does_not() {
        let inputs = ScenarioInputs {
            monthly_property_taxes: 300.0,
            monthly_insurance: 100.0,
            cost_inflation: 10.0,
            years_to_hold: 2,
            ..rental_inputs()
        };
        let result = project(&inputs, as_of());
        let payment = ProjectionEngine::new(ProjectionConfig::as_of(as_of()))
            .loan_terms(&inputs)
            .monthly_payment;

        assert_relative_eq!(result.years[0].monthly.total_expenses, payment + 400.0, epsilon = 1e-9);
        assert_relative_eq!(result.years[2].monthly.total_expenses, payment + 484.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_interest_loan() {
        let inputs = ScenarioInputs {
            interest_rate: 0.0,
            original_loan_amount: 360_000.0,
            loan_origination_date: as_of(),
            years_to_hold: 30,
            ..rental_inputs()
        };
        let result = project(&inputs, as_of());

        assert_eq!(result.years[0].loan_balance, 360_000.0);
        assert_eq!(result.years[1].loan_balance, 348_000.0);
        assert_eq!(result.years[30].loan_balance, 0.0);
        assert!(result.years.iter().all(|r| r.hold_net_worth.is_finite()));
    }

    #[test]
    fn test_future_origination_counts_no_payments() {
        let inputs = ScenarioInputs {
            loan_origination_date: as_of() + Months::new(3),
            ..rental_inputs()
        };
        let result = project(&inputs, as_of());
        assert_eq!(result.years[0].loan_balance, 240_000.0);
    }

    #[test]
    fn test_projection_is_repeatable() {
        let inputs = ScenarioInputs { years_to_hold: 30, ..rental_inputs() };
        let engine = ProjectionEngine::new(ProjectionConfig::as_of(as_of()));

        assert_eq!(engine.project(&inputs), engine.project(&inputs));
    }

    fn arb_inputs() -> impl Strategy<Value = ScenarioInputs> {
        (
            (0.0f64..2_000_000.0, 0.0f64..2_000_000.0, 0.0f64..1_500_000.0, 0.0f64..=30.0),
            (1u32..=50, 0u32..600, any::<bool>(), 0.0f64..5_000.0),
            (0.0f64..20_000.0, -20.0f64..=30.0, 0.0f64..=100.0, 0.0f64..=100.0),
            (-20.0f64..=30.0, -20.0f64..=30.0, 0.0f64..=100.0, 0.0f64..=100.0),
            (-20.0f64..=30.0, 1u32..=30),
        )
            .prop_map(
                |(
                    (purchase, value, loan, rate),
                    (term, age_months, primary, costs),
                    (rent, rent_inc, mgmt, rent_tax),
                    (appreciation, inflation, fees, cg_tax),
                    (ret, years),
                )| ScenarioInputs {
                    purchase_price: purchase,
                    current_home_value: value,
                    loan_origination_date: as_of() - Months::new(age_months),
                    original_loan_amount: loan,
                    interest_rate: rate,
                    mortgage_term_years: term,
                    primary_residence: primary,
                    monthly_hoa: costs / 4.0,
                    monthly_property_taxes: costs / 4.0,
                    monthly_insurance: costs / 4.0,
                    monthly_maintenance: costs / 4.0,
                    monthly_rent: rent,
                    annual_rent_increase: rent_inc,
                    management_fee: mgmt,
                    rental_income_tax_rate: rent_tax,
                    home_appreciation: appreciation,
                    cost_inflation: inflation,
                    selling_fee_rate: fees,
                    capital_gains_tax_rate: cg_tax,
                    investment_return: ret,
                    years_to_hold: years,
                },
            )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_one_row_per_year_in_order(inputs in arb_inputs()) {
            let result = project(&inputs, as_of());

            prop_assert_eq!(result.years.len() as u32, inputs.years_to_hold + 1);
            for (i, row) in result.years.iter().enumerate() {
                prop_assert_eq!(row.year, i as u32);
            }
        }

        #[test]
        fn prop_year_zero_has_no_cash_flow(inputs in arb_inputs()) {
            let result = project(&inputs, as_of());
            let y0 = &result.years[0];

            prop_assert_eq!(y0.net_rental_cash_flow, 0.0);
            prop_assert_eq!(y0.cumulative_rental_cash_flow, 0.0);
            prop_assert_eq!(y0.home_value, inputs.current_home_value);
        }

        #[test]
        fn prop_negative_baseline_is_constant(inputs in arb_inputs()) {
            let result = project(&inputs, as_of());
            let baseline = result.years[0].net_sale_proceeds;
            prop_assume!(baseline <= 0.0);

            for row in &result.years {
                prop_assert_eq!(row.sell_value, baseline);
            }
        }

        #[test]
        fn prop_balances_never_negative(inputs in arb_inputs()) {
            let result = project(&inputs, as_of());

            for row in &result.years {
                prop_assert!(row.loan_balance >= 0.0);
                prop_assert!(row.capital_gains_tax >= 0.0);
                prop_assert!(row.hold_net_worth.is_finite());
                prop_assert!(row.sell_value.is_finite());
            }
        }
    }
}
