use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::error::ForecastError;
use super::layout::{Category, RowSpec, SheetLayout};
use super::round2;
use crate::data::model::SheetTable;

// ---------------------------------------------------------------------------
// HistoricalRow – one line item's observed history
// ---------------------------------------------------------------------------

/// One line item's historical observations, sliced out of the sheet.
/// Immutable once extracted.
#[derive(Debug, Clone)]
pub struct HistoricalRow {
    pub category: Category,
    pub values: Vec<f64>,
}

impl HistoricalRow {
    /// Period-over-period growth ratios, rounded to 2 decimals.
    ///
    /// `rate[i] = (v[i+1] - v[i]) / v[i]`; always one entry shorter than
    /// the history.  A zero divisor fails the whole category rather than
    /// leaving a NaN hole in the series.
    pub fn growth_series(&self) -> Result<Vec<f64>, ForecastError> {
        let mut rates = Vec::with_capacity(self.values.len().saturating_sub(1));
        for (i, pair) in self.values.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            if prev == 0.0 {
                return Err(ForecastError::DivisionByZero {
                    category: self.category,
                    month: i + 1,
                });
            }
            rates.push(round2((next - prev) / prev));
        }
        Ok(rates)
    }
}

// ---------------------------------------------------------------------------
// Assumptions – the extractor's output
// ---------------------------------------------------------------------------

/// Everything the projection builder needs, derived once per loaded sheet.
///
/// Static categories grew by exactly 0.0 in at least one historical period
/// and are held flat in projections; every other category carries the mean
/// of its growth series.  `avg_growth_rates` never contains a static
/// category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assumptions {
    pub static_keys: BTreeSet<Category>,
    pub avg_growth_rates: BTreeMap<Category, f64>,
    pub initial_values: BTreeMap<Category, f64>,
}

impl Assumptions {
    pub fn is_static(&self, category: Category) -> bool {
        self.static_keys.contains(&category)
    }
}

/// Slice the configured rows out of `table` and derive growth assumptions.
pub fn extract(table: &SheetTable, layout: &SheetLayout) -> Result<Assumptions, ForecastError> {
    let (min_rows, min_cols) = (layout.min_rows(), layout.min_cols());
    if table.n_rows() < min_rows || table.n_cols < min_cols {
        return Err(ForecastError::InputLayout {
            rows: table.n_rows(),
            cols: table.n_cols,
            min_rows,
            min_cols,
        });
    }

    let mut static_keys = BTreeSet::new();
    let mut avg_growth_rates = BTreeMap::new();
    let mut initial_values = BTreeMap::new();

    for spec in &layout.rows {
        let historical = slice_row(table, layout, spec)?;
        let rates = historical.growth_series()?;

        if rates.contains(&0.0) {
            static_keys.insert(spec.category);
        } else {
            let mean = rates.iter().sum::<f64>() / rates.len() as f64;
            avg_growth_rates.insert(spec.category, round2(mean));
        }
        initial_values.insert(spec.category, historical.values[0]);
    }

    Ok(Assumptions {
        static_keys,
        avg_growth_rates,
        initial_values,
    })
}

fn slice_row(
    table: &SheetTable,
    layout: &SheetLayout,
    spec: &RowSpec,
) -> Result<HistoricalRow, ForecastError> {
    let values = (layout.first_value_col..layout.first_value_col + layout.history_len)
        .map(|col| {
            table
                .number_at(spec.row, col)
                .ok_or(ForecastError::NonNumericCell {
                    category: spec.category,
                    row: spec.row,
                    col,
                })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    Ok(HistoricalRow {
        category: spec.category,
        values,
    })
}

// ---------------------------------------------------------------------------
// Test fixtures shared with the state-layer tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::test_fixtures::{default_sheet, growing, sheet_with};
    use super::*;
    use crate::data::model::CellValue;

    #[test]
    fn growth_series_has_one_fewer_entry_than_history() {
        let row = HistoricalRow {
            category: Category::ProductSales,
            values: growing(100.0, 0.10),
        };
        assert_eq!(row.growth_series().unwrap().len(), 12);
    }

    #[test]
    fn constant_growth_history_yields_constant_series() {
        // [100, 110, 121, 133.1, …] → every rate 0.1
        let row = HistoricalRow {
            category: Category::ProductSales,
            values: growing(100.0, 0.10),
        };
        let rates = row.growth_series().unwrap();
        assert!(rates.iter().all(|&r| r == 0.10), "rates: {rates:?}");
    }

    #[test]
    fn zero_divisor_fails_the_category() {
        let mut values = growing(100.0, 0.10);
        values[4] = 0.0;
        let row = HistoricalRow {
            category: Category::Marketing,
            values,
        };
        assert_eq!(
            row.growth_series().unwrap_err(),
            ForecastError::DivisionByZero {
                category: Category::Marketing,
                month: 5,
            }
        );
    }

    #[test]
    fn extract_classifies_static_and_growing() {
        let assumptions = extract(&default_sheet(), &SheetLayout::default()).unwrap();

        assert_eq!(assumptions.static_keys.len(), 1);
        assert!(assumptions.is_static(Category::StaffSalaries));

        // The averages cover exactly the non-static categories.
        assert_eq!(assumptions.avg_growth_rates.len(), 4);
        assert!(!assumptions.avg_growth_rates.contains_key(&Category::StaffSalaries));
        assert_relative_eq!(assumptions.avg_growth_rates[&Category::ProductSales], 0.10);
        assert_relative_eq!(assumptions.avg_growth_rates[&Category::CostOfGoodsSold], 0.02);

        // Initial values cover every category, static included.
        assert_eq!(assumptions.initial_values.len(), 5);
        assert_relative_eq!(assumptions.initial_values[&Category::ProductSales], 100.0);
        assert_relative_eq!(assumptions.initial_values[&Category::StaffSalaries], 40_000.0);
    }

    #[test]
    fn one_flat_period_marks_the_category_static() {
        // [50, 50, 60.5, …]: a single 0.0 rate makes the whole row static.
        let mut product = growing(50.0, 0.10);
        product[1] = product[0];
        let sheet = sheet_with([
            product,
            growing(42_000.0, 0.05),
            growing(55_000.0, 0.02),
            growing(12_000.0, 0.03),
            vec![40_000.0; 13],
        ]);

        let assumptions = extract(&sheet, &SheetLayout::default()).unwrap();
        assert!(assumptions.is_static(Category::ProductSales));
        assert!(!assumptions.avg_growth_rates.contains_key(&Category::ProductSales));
        assert_relative_eq!(assumptions.initial_values[&Category::ProductSales], 50.0);
    }

    #[test]
    fn undersized_table_is_a_layout_error() {
        let table = SheetTable::from_rows(vec![vec![CellValue::Number(1.0); 14]; 5]);
        let err = extract(&table, &SheetLayout::default()).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InputLayout {
                rows: 5,
                cols: 14,
                min_rows: 9,
                min_cols: 14,
            }
        );
    }

    #[test]
    fn non_numeric_history_cell_is_rejected() {
        let mut sheet = default_sheet();
        sheet.rows[2][5] = CellValue::Text("n/a".into());
        let err = extract(&sheet, &SheetLayout::default()).unwrap_err();
        assert_eq!(
            err,
            ForecastError::NonNumericCell {
                category: Category::ProductSales,
                row: 2,
                col: 5,
            }
        );
    }

    #[test]
    fn assumptions_serialize_with_category_names() {
        let assumptions = extract(&default_sheet(), &SheetLayout::default()).unwrap();
        let json = serde_json::to_value(&assumptions).unwrap();
        assert_eq!(json["static_keys"][0], "Staff Salaries");
        assert_eq!(json["avg_growth_rates"]["Product Sales"], 0.10);
        assert_eq!(json["initial_values"]["Staff Salaries"], 40_000.0);
    }
}
