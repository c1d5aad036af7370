//! Data layer: cell types and workbook loading.
//!
//! ```text
//!  .xlsx / .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → SheetTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ SheetTable  │  2-D grid of CellValue at absolute coordinates
//!   └────────────┘
//! ```

pub mod loader;
pub mod model;
