use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::util::display::{ArrayFormatter, FormatOptions};
use calamine::{open_workbook_auto, CellErrorType, Data, Reader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{is_missing_token, CellValue, Table};
use crate::error::{PipelineError, PipelineResult};

/// Worksheet the measurements are read from.
pub const SHEET_NAME: &str = "Sheet1";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a measurement table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.ods` – worksheet [`SHEET_NAME`], first row is the header
/// * `.csv`     – header row, one cell per measurement
/// * `.parquet` – flat columns, nulls become empty cells
pub fn load_file(path: &Path) -> PipelineResult<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_workbook(path, SHEET_NAME),
        "csv" => Ok(load_csv(path)?),
        "parquet" | "pq" => Ok(load_parquet(path)?),
        other => Err(PipelineError::UnsupportedFormat(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Workbook loader
// ---------------------------------------------------------------------------

/// Read one worksheet. Column positions are absolute: if the used range
/// starts at column C, columns A and B come back as empty cells so that
/// positional slicing still lines up with the sheet letters.
fn load_workbook(path: &Path, sheet: &str) -> PipelineResult<Table> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(PipelineError::SheetNotFound {
            name: sheet.to_string(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("reading worksheet '{sheet}'"))?;

    let col_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    let mut rows = range.rows().map(|row| {
        std::iter::repeat(CellValue::Empty)
            .take(col_offset)
            .chain(row.iter().map(data_to_cell))
            .collect::<Vec<_>>()
    });

    let header: Vec<String> = match rows.next() {
        Some(cells) => cells.iter().map(|c| c.to_string()).collect(),
        None => Vec::new(),
    };

    Ok(Table::new(header, rows.collect()))
}

fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) if is_missing_token(s) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Empty | Data::Error(CellErrorType::NA) => CellValue::Empty,
        // Dates, durations and other error cells are not measurements.
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one value per cell.
fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(CellValue::parse).collect());
    }

    Ok(Table::new(headers, rows))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a flat Parquet table, e.g. one written by `df.to_parquet()`.
fn load_parquet(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let column_names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();

    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for row in 0..batch.num_rows() {
            let cells = batch
                .columns()
                .iter()
                .map(|col| extract_cell(col, row))
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("parquet row {row}"))?;
            rows.push(cells);
        }
    }

    Ok(Table::new(column_names, rows))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &Arc<dyn Array>, row: usize) -> Result<CellValue> {
    if col.is_null(row) {
        return Ok(CellValue::Empty);
    }
    let cell = match col.data_type() {
        DataType::Float64 => CellValue::Number(col.as_primitive::<Float64Type>().value(row)),
        DataType::Float32 => {
            CellValue::Number(col.as_primitive::<Float32Type>().value(row) as f64)
        }
        DataType::Int64 => CellValue::Number(col.as_primitive::<Int64Type>().value(row) as f64),
        DataType::Int32 => CellValue::Number(col.as_primitive::<Int32Type>().value(row) as f64),
        DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
        DataType::Utf8 => CellValue::parse(col.as_string::<i32>().value(row)),
        DataType::LargeUtf8 => CellValue::parse(col.as_string::<i64>().value(row)),
        _ => {
            let formatter = ArrayFormatter::try_new(col.as_ref(), &FormatOptions::default())
                .with_context(|| format!("formatting {:?} column", col.data_type()))?;
            CellValue::Text(formatter.value(row).to_string())
        }
    };
    Ok(cell)
}
