//! Shareable query-string form of the raw inputs
//!
//! Values travel as opaque strings. Nothing is validated here; a restored
//! form goes through [`RawInputs::validate`] like any other.

use super::raw::RawInputs;
use crate::error::Result;

impl RawInputs {
    /// Encode the fields that are set as `key=value&...`
    pub fn to_query_string(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }

    /// Restore fields from a query string; a leading `?` and unknown keys are ignored
    pub fn from_query_string(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        Ok(serde_urlencoded::from_str(query)?)
    }
}
