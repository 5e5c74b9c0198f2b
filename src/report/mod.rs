//! Presentation of projection results: currency text, tables, CSV, chart series

mod chart;
mod format;
mod table;

pub use chart::ChartSeries;
pub use format::format_currency;
pub use table::{render_table, table_rows, write_csv, TableRow};
