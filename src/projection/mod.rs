//! Projection engine for the hold-versus-sell comparison

mod state;
mod engine;
mod results;

pub use state::ProjectionState;
pub use engine::{
    capital_gains_tax, project, rental_cash_flow, ProjectionConfig, ProjectionEngine,
    EXEMPTION_WINDOW_YEARS, PRIMARY_RESIDENCE_EXEMPTION,
};
pub use results::{BetterOption, MonthlyBreakdown, ProjectionResult, ProjectionSummary, YearResult};
