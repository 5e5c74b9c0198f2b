//! Chart data: the two net-worth trajectories indexed by year

use serde::Serialize;

use crate::projection::ProjectionResult;

/// Index-aligned series for a hold versus sell line chart
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub years: Vec<u32>,
    /// Combined hold net worth
    pub hold: Vec<f64>,
    /// Sell-and-invest trajectory
    pub sell: Vec<f64>,
}

impl ChartSeries {
    /// First year in which the better option changes, if it ever does
    pub fn crossover_year(&self) -> Option<u32> {
        let leads: Vec<bool> = self.hold.iter().zip(&self.sell).map(|(h, s)| h > s).collect();
        leads
            .windows(2)
            .position(|pair| pair[0] != pair[1])
            .map(|i| self.years[i + 1])
    }
}

impl From<&ProjectionResult> for ChartSeries {
    fn from(result: &ProjectionResult) -> Self {
        let mut series = ChartSeries::default();
        for row in &result.years {
            series.years.push(row.year);
            series.hold.push(row.hold_net_worth);
            series.sell.push(row.sell_value);
        }
        series
    }
}
