use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Category – the five base income-statement line items
// ---------------------------------------------------------------------------

/// A financial line item extracted from the workbook.  Ordered in
/// presentation order; serializes to its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Product Sales")]
    ProductSales,
    #[serde(rename = "Service Sales")]
    ServiceSales,
    #[serde(rename = "Cost of Goods Sold")]
    CostOfGoodsSold,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Staff Salaries")]
    StaffSalaries,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::ProductSales => "Product Sales",
            Category::ServiceSales => "Service Sales",
            Category::CostOfGoodsSold => "Cost of Goods Sold",
            Category::Marketing => "Marketing",
            Category::StaffSalaries => "Staff Salaries",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// SheetLayout – where each line item lives in the workbook
// ---------------------------------------------------------------------------

/// One extracted row: which sheet row holds which category.
#[derive(Debug, Clone, Copy)]
pub struct RowSpec {
    pub row: usize,
    pub category: Category,
}

/// Named description of the fixed workbook layout, instead of magic
/// indices scattered through the extractor.
///
/// Row and column indices are absolute (0-based) sheet coordinates.
#[derive(Debug, Clone)]
pub struct SheetLayout {
    pub rows: Vec<RowSpec>,
    /// First column of the historical window.
    pub first_value_col: usize,
    /// Number of historical observations per row.
    pub history_len: usize,
}

impl Default for SheetLayout {
    /// The assignment workbook: five line items on rows 2–8, thirteen
    /// monthly values starting in column 1.
    fn default() -> Self {
        SheetLayout {
            rows: vec![
                RowSpec { row: 2, category: Category::ProductSales },
                RowSpec { row: 3, category: Category::ServiceSales },
                RowSpec { row: 6, category: Category::CostOfGoodsSold },
                RowSpec { row: 7, category: Category::Marketing },
                RowSpec { row: 8, category: Category::StaffSalaries },
            ],
            first_value_col: 1,
            history_len: 13,
        }
    }
}

impl SheetLayout {
    /// Minimum number of rows a conforming table must have.
    pub fn min_rows(&self) -> usize {
        self.rows.iter().map(|r| r.row + 1).max().unwrap_or(0)
    }

    /// Minimum number of columns a conforming table must have.
    pub fn min_cols(&self) -> usize {
        self.first_value_col + self.history_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_assignment_workbook() {
        let layout = SheetLayout::default();
        assert_eq!(layout.min_rows(), 9);
        assert_eq!(layout.min_cols(), 14);
        assert_eq!(layout.rows.len(), 5);
        assert_eq!(layout.rows[0].row, 2);
        assert_eq!(layout.rows[0].category, Category::ProductSales);
        assert_eq!(layout.rows[4].row, 8);
        assert_eq!(layout.rows[4].category, Category::StaffSalaries);
    }

    #[test]
    fn category_serializes_to_display_name() {
        let json = serde_json::to_string(&Category::CostOfGoodsSold).unwrap();
        assert_eq!(json, "\"Cost of Goods Sold\"");
    }
}
