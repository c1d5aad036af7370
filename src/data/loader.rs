use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};

use super::model::{CellValue, SheetTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a workbook into a [`SheetTable`].  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.ods` – first worksheet, via calamine
/// * `.csv` – the same grid, one record per sheet row, no header handling
pub fn load_file(path: &Path) -> Result<SheetTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => load_workbook(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Workbook loader (calamine)
// ---------------------------------------------------------------------------

/// Read the first worksheet as a 2-D grid of cells.
///
/// Calamine ranges start at the first used cell, so the grid is padded
/// back out to absolute A1-based coordinates before anything indexes
/// into it.
fn load_workbook(path: &Path) -> Result<SheetTable> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no worksheets")?
        .context("reading first worksheet")?;

    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(row_offset + range.height());
    rows.resize_with(row_offset, Vec::new);

    for sheet_row in range.rows() {
        let mut cells = Vec::with_capacity(col_offset + sheet_row.len());
        cells.resize(col_offset, CellValue::Empty);
        cells.extend(sheet_row.iter().map(convert_cell));
        rows.push(cells);
    }

    Ok(SheetTable::from_rows(rows))
}

fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::Text(format!("{e:?}")),
        // Serial date numbers; the financial layout never uses them.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV files carry the same grid with no header semantics: record `n` is
/// sheet row `n`.  Numeric-looking fields become numbers, empty fields
/// empty cells, everything else text.
fn load_csv(path: &Path) -> Result<SheetTable> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv_grid(file)
}

fn read_csv_grid<R: std::io::Read>(reader: R) -> Result<SheetTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(parse_cell).collect());
    }

    Ok(SheetTable::from_rows(rows))
}

fn parse_cell(field: &str) -> CellValue {
    let field = field.trim();
    if field.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(v) = field.parse::<f64>() {
        return CellValue::Number(v);
    }
    if field == "true" || field == "false" {
        return CellValue::Bool(field == "true");
    }
    CellValue::Text(field.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn csv_grid_keeps_absolute_coordinates() {
        let csv = "Income Statement,Month 1,Month 2\nRevenue,,\nProduct Sales,100,110\n";
        let table = read_csv_grid(Cursor::new(csv)).unwrap();
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.number_at(2, 1), Some(100.0));
        assert_eq!(table.number_at(2, 2), Some(110.0));
        assert_eq!(*table.cell(1, 1), CellValue::Empty);
    }

    #[test]
    fn csv_fields_parse_by_type() {
        let table = read_csv_grid(Cursor::new("x,1.5,true,\n")).unwrap();
        assert_eq!(*table.cell(0, 0), CellValue::Text("x".into()));
        assert_eq!(*table.cell(0, 1), CellValue::Number(1.5));
        assert_eq!(*table.cell(0, 2), CellValue::Bool(true));
        assert_eq!(*table.cell(0, 3), CellValue::Empty);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        assert!(load_file(Path::new("data.parquet")).is_err());
    }
}
