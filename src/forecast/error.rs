use thiserror::Error;

use super::layout::Category;

/// Everything that can go wrong between a loaded sheet and a rendered
/// projection.  All variants are fatal to the current computation only;
/// the UI stays up and shows the message.
#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    #[error("table is {rows} rows × {cols} columns, need at least {min_rows} × {min_cols}")]
    InputLayout {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },

    #[error("{category} cell at row {row}, column {col} is not numeric")]
    NonNumericCell {
        category: Category,
        row: usize,
        col: usize,
    },

    #[error("{category}: month {month} value is zero, growth rate is undefined")]
    DivisionByZero { category: Category, month: usize },

    #[error("period count must be non-negative, got {0}")]
    InvalidPeriods(i64),

    #[error("{label} growth override must be between 0 and 100, got {pct}")]
    InvalidRate { label: &'static str, pct: f64 },
}
