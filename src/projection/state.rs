//! Running state threaded through the year loop of a single projection

/// Values carried from one year to the next
///
/// Lives for one projection run only. Nothing here is shared between runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectionState {
    /// After-tax rental cash flow accumulated over years 1..=current
    pub cumulative_rental_cash_flow: f64,

    /// After-tax sale proceeds at year 0; set once, read-only afterwards
    pub sell_year0_baseline: Option<f64>,
}

impl ProjectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold this year's cash flow into the running total and return the total
    ///
    /// Year 0 is the decision point: it contributes nothing and always reports 0.
    pub fn record_cash_flow(&mut self, year: u32, net_cash_flow: f64) -> f64 {
        if year == 0 {
            self.cumulative_rental_cash_flow = 0.0;
        } else {
            self.cumulative_rental_cash_flow += net_cash_flow;
        }
        self.cumulative_rental_cash_flow
    }

    /// Remember year-0 proceeds; later calls keep the first value
    pub fn capture_baseline(&mut self, net_after_tax_proceeds: f64) -> f64 {
        *self.sell_year0_baseline.get_or_insert(net_after_tax_proceeds)
    }

    /// Value of selling at year 0 and investing the proceeds for `year` years
    ///
    /// A loss is held flat rather than compounded as debt.
    pub fn sell_value(&self, year: u32, investment_return_percent: f64) -> f64 {
        let baseline = self.sell_year0_baseline.unwrap_or(0.0);
        if baseline > 0.0 {
            baseline * (1.0 + investment_return_percent / 100.0).powi(year as i32)
        } else {
            baseline
        }
    }
}
