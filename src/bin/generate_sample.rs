//! Writes a deterministic `projections.xlsx` in the layout the viewer
//! expects: header on row 0, section labels on rows 1 and 5, and the five
//! line items on rows 2, 3, 6, 7 and 8 with thirteen monthly values
//! starting in column 1.

use rust_xlsxwriter::{Workbook, XlsxError};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

const MONTHS: usize = 13;

struct LineItem {
    name: &'static str,
    row: u32,
    initial: f64,
    /// Monthly growth applied between observations; None = flat.
    monthly_growth: Option<f64>,
    /// Max ± wobble added to the growth each month.  Must stay small
    /// enough that no rounded rate lands on exactly 0.00.
    wobble: f64,
}

fn main() -> Result<(), XlsxError> {
    let items = [
        LineItem {
            name: "Product Sales",
            row: 2,
            initial: 100_000.0,
            monthly_growth: Some(0.04),
            wobble: 0.005,
        },
        LineItem {
            name: "Service Sales",
            row: 3,
            initial: 42_000.0,
            monthly_growth: Some(0.05),
            wobble: 0.005,
        },
        LineItem {
            name: "Cost of Goods Sold",
            row: 6,
            initial: 55_000.0,
            monthly_growth: Some(0.025),
            wobble: 0.004,
        },
        LineItem {
            name: "Marketing",
            row: 7,
            initial: 12_000.0,
            monthly_growth: Some(0.03),
            wobble: 0.004,
        },
        LineItem {
            name: "Staff Salaries",
            row: 8,
            initial: 40_000.0,
            monthly_growth: None,
            wobble: 0.0,
        },
    ];

    let mut rng = SimpleRng::new(20240901);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "Income Statement")?;
    for month in 0..MONTHS {
        sheet.write_string(0, (month + 1) as u16, format!("Month {}", month + 1))?;
    }
    sheet.write_string(1, 0, "Revenue")?;
    sheet.write_string(5, 0, "Operating Expenses")?;

    for item in &items {
        sheet.write_string(item.row, 0, item.name)?;
        let mut value = item.initial;
        for month in 0..MONTHS {
            sheet.write_number(item.row, (month + 1) as u16, (value * 100.0).round() / 100.0)?;
            if let Some(growth) = item.monthly_growth {
                let wobble = (rng.next_f64() * 2.0 - 1.0) * item.wobble;
                value *= 1.0 + growth + wobble;
            }
        }
    }

    workbook.save("projections.xlsx")?;
    println!(
        "Wrote projections.xlsx ({} line items, {} months of history)",
        items.len(),
        MONTHS
    );
    Ok(())
}
