//! Scenario inputs: raw form values, their repair into range, and query-string state

pub mod bounds;
mod inputs;
mod query;
mod raw;

pub use bounds::{FieldBounds, FIELDS};
pub use inputs::ScenarioInputs;
pub use raw::{RawInputs, DATE_FORMAT};
