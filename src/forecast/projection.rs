use super::assumptions::Assumptions;
use super::error::ForecastError;
use super::layout::Category;
use super::round2;

// ---------------------------------------------------------------------------
// ProjectionTable – the projected income statement
// ---------------------------------------------------------------------------

pub const TOTAL_SALES: &str = "Total Sales";
pub const TOTAL_OPERATING_EXPENSES: &str = "Total Operating Expenses";
pub const NET_INCOME: &str = "Net Income";

/// One presentation row of the projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRow {
    pub label: String,
    /// Computed from other rows rather than projected from history.
    pub derived: bool,
    pub values: Vec<f64>,
}

/// The full projected income statement: five base rows plus three derived
/// rows, always in the same presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionTable {
    /// "Initial", "Month 1", … "Month N".
    pub columns: Vec<String>,
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionTable {
    pub fn row(&self, label: &str) -> Option<&ProjectionRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

// ---------------------------------------------------------------------------
// project – compound the assumptions forward
// ---------------------------------------------------------------------------

/// Build the projected income statement.
///
/// Pure: the override rates are applied to local copies, never written
/// back into `assumptions`, so repeated calls with the same inputs agree.
/// Static categories stay flat regardless of the overrides.
pub fn project(
    assumptions: &Assumptions,
    periods: i64,
    product_rate_pct: f64,
    service_rate_pct: f64,
) -> Result<ProjectionTable, ForecastError> {
    if periods < 0 {
        return Err(ForecastError::InvalidPeriods(periods));
    }
    for (label, pct) in [
        ("Product Sales", product_rate_pct),
        ("Service Sales", service_rate_pct),
    ] {
        if !(0.0..=100.0).contains(&pct) {
            return Err(ForecastError::InvalidRate { label, pct });
        }
    }
    let periods = periods as usize;

    let series = |category: Category| -> Vec<f64> {
        let initial = assumptions
            .initial_values
            .get(&category)
            .copied()
            .unwrap_or(0.0);
        if assumptions.is_static(category) {
            return vec![initial; periods + 1];
        }
        let rate = match category {
            Category::ProductSales => product_rate_pct / 100.0,
            Category::ServiceSales => service_rate_pct / 100.0,
            _ => assumptions
                .avg_growth_rates
                .get(&category)
                .copied()
                .unwrap_or(0.0),
        };
        // Compound from the initial value, not from the previous period.
        (0..=periods)
            .map(|p| round2(initial * (1.0 + rate).powi(p as i32)))
            .collect()
    };

    let product = series(Category::ProductSales);
    let service = series(Category::ServiceSales);
    let cogs = series(Category::CostOfGoodsSold);
    let marketing = series(Category::Marketing);
    let salaries = series(Category::StaffSalaries);

    let total_sales = column_sum(&[&product, &service]);
    let total_opex = column_sum(&[&cogs, &marketing, &salaries]);
    let net_income: Vec<f64> = total_sales
        .iter()
        .zip(&total_opex)
        .map(|(sales, expenses)| sales - expenses)
        .collect();

    let columns = std::iter::once("Initial".to_string())
        .chain((1..=periods).map(|i| format!("Month {i}")))
        .collect();

    let base = |category: Category, values: Vec<f64>| ProjectionRow {
        label: category.name().to_string(),
        derived: false,
        values,
    };
    let derived = |label: &str, values: Vec<f64>| ProjectionRow {
        label: label.to_string(),
        derived: true,
        values,
    };

    Ok(ProjectionTable {
        columns,
        rows: vec![
            base(Category::ProductSales, product),
            base(Category::ServiceSales, service),
            derived(TOTAL_SALES, total_sales),
            base(Category::CostOfGoodsSold, cogs),
            base(Category::Marketing, marketing),
            base(Category::StaffSalaries, salaries),
            derived(TOTAL_OPERATING_EXPENSES, total_opex),
            derived(NET_INCOME, net_income),
        ],
    })
}

fn column_sum(rows: &[&Vec<f64>]) -> Vec<f64> {
    let len = rows.first().map(|r| r.len()).unwrap_or(0);
    (0..len)
        .map(|i| rows.iter().map(|r| r[i]).sum())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;

    fn sample_assumptions() -> Assumptions {
        let mut avg_growth_rates = BTreeMap::new();
        // Sales rates are present but replaced by the overrides.
        avg_growth_rates.insert(Category::ProductSales, 0.10);
        avg_growth_rates.insert(Category::ServiceSales, 0.08);
        avg_growth_rates.insert(Category::CostOfGoodsSold, 0.02);
        avg_growth_rates.insert(Category::Marketing, 0.03);

        let mut initial_values = BTreeMap::new();
        initial_values.insert(Category::ProductSales, 100.0);
        initial_values.insert(Category::ServiceSales, 200.0);
        initial_values.insert(Category::CostOfGoodsSold, 50.0);
        initial_values.insert(Category::Marketing, 10.0);
        initial_values.insert(Category::StaffSalaries, 40.0);

        Assumptions {
            static_keys: BTreeSet::from([Category::StaffSalaries]),
            avg_growth_rates,
            initial_values,
        }
    }

    #[test]
    fn compound_growth_from_initial() {
        // periods=3 at 4% → 100, 104, 108.16, 112.49
        let table = project(&sample_assumptions(), 3, 4.0, 5.0).unwrap();
        assert_eq!(
            table.row("Product Sales").unwrap().values,
            vec![100.0, 104.0, 108.16, 112.49]
        );
    }

    #[test]
    fn overrides_win_over_extracted_sales_rates() {
        // The extracted 10% Product Sales rate must not leak through.
        let table = project(&sample_assumptions(), 1, 4.0, 5.0).unwrap();
        assert_eq!(table.row("Product Sales").unwrap().values, vec![100.0, 104.0]);
        assert_eq!(table.row("Service Sales").unwrap().values, vec![200.0, 210.0]);
    }

    #[test]
    fn expense_rows_use_extracted_rates() {
        let table = project(&sample_assumptions(), 1, 4.0, 5.0).unwrap();
        assert_eq!(table.row("Cost of Goods Sold").unwrap().values, vec![50.0, 51.0]);
        assert_eq!(table.row("Marketing").unwrap().values, vec![10.0, 10.3]);
    }

    #[test]
    fn static_rows_ignore_overrides() {
        let table = project(&sample_assumptions(), 4, 99.0, 99.0).unwrap();
        assert_eq!(table.row("Staff Salaries").unwrap().values, vec![40.0; 5]);
    }

    #[test]
    fn fixed_row_order_and_labels() {
        let table = project(&sample_assumptions(), 2, 4.0, 5.0).unwrap();
        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Product Sales",
                "Service Sales",
                "Total Sales",
                "Cost of Goods Sold",
                "Marketing",
                "Staff Salaries",
                "Total Operating Expenses",
                "Net Income",
            ]
        );
        assert_eq!(table.columns, ["Initial", "Month 1", "Month 2"]);
        assert!(table.rows.iter().all(|r| r.values.len() == 3));
    }

    #[test]
    fn zero_periods_still_has_initial_column() {
        let table = project(&sample_assumptions(), 0, 4.0, 5.0).unwrap();
        assert_eq!(table.columns, ["Initial"]);
        assert_eq!(table.rows.len(), 8);
    }

    #[test]
    fn derived_rows_sum_exactly() {
        let table = project(&sample_assumptions(), 6, 4.0, 5.0).unwrap();
        for i in 0..table.columns.len() {
            let at = |label: &str| table.row(label).unwrap().values[i];
            assert_eq!(at(TOTAL_SALES), at("Product Sales") + at("Service Sales"));
            assert_eq!(
                at(TOTAL_OPERATING_EXPENSES),
                at("Cost of Goods Sold") + at("Marketing") + at("Staff Salaries")
            );
            assert_eq!(at(NET_INCOME), at(TOTAL_SALES) - at(TOTAL_OPERATING_EXPENSES));
        }
    }

    #[test]
    fn project_is_pure_and_repeatable() {
        let assumptions = sample_assumptions();
        let before = assumptions.clone();
        let first = project(&assumptions, 5, 10.0, 20.0).unwrap();
        let second = project(&assumptions, 5, 10.0, 20.0).unwrap();
        assert_eq!(first, second);
        assert_eq!(assumptions, before);
    }

    #[test]
    fn negative_periods_are_rejected() {
        assert_eq!(
            project(&sample_assumptions(), -1, 4.0, 5.0).unwrap_err(),
            ForecastError::InvalidPeriods(-1)
        );
    }

    #[test]
    fn out_of_range_overrides_are_rejected() {
        assert!(matches!(
            project(&sample_assumptions(), 3, -2.0, 5.0).unwrap_err(),
            ForecastError::InvalidRate { label: "Product Sales", .. }
        ));
        assert!(matches!(
            project(&sample_assumptions(), 3, 4.0, 101.0).unwrap_err(),
            ForecastError::InvalidRate { label: "Service Sales", .. }
        ));
    }
}
