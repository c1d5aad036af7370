use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single worksheet cell
// ---------------------------------------------------------------------------

/// A dynamically-typed worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{v:.0}")
                } else {
                    write!(f, "{v:.2}")
                }
            }
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl CellValue {
    /// Numeric view of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SheetTable – the loaded worksheet as a plain 2-D grid
// ---------------------------------------------------------------------------

/// A worksheet transcribed cell-by-cell.
///
/// Coordinates are absolute (0-based) sheet coordinates: `cell(2, 1)` is
/// B3 no matter where the used range of the source file started.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    /// Row-major cells.  Rows may be ragged; `cell` pads with `Empty`.
    pub rows: Vec<Vec<CellValue>>,
    /// Width of the widest row.
    pub n_cols: usize,
}

impl SheetTable {
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let n_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        SheetTable { rows, n_cols }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (row, col); out-of-range positions read as `Empty`.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Empty)
    }

    /// Numeric value at (row, col), if the cell holds a number.
    pub fn number_at(&self, row: usize, col: usize) -> Option<f64> {
        self.cell(row, col).as_f64()
    }
}
