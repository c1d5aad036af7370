//! Forecast core: assumption extraction and income-statement projection.
//!
//! ```text
//!  SheetTable ──► extract ──► Assumptions ──► project ──► ProjectionTable
//!               (SheetLayout)               (periods, rate overrides)
//! ```
//!
//! Both operations are pure; the UI recomputes the projection from the
//! same extracted `Assumptions` on every control change.

pub mod assumptions;
pub mod error;
pub mod layout;
pub mod projection;

pub use assumptions::{Assumptions, extract};
pub use error::ForecastError;
pub use layout::{Category, RowSpec, SheetLayout};
pub use projection::{ProjectionTable, project};

/// Round to 2 decimal places, away from zero on ties.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
