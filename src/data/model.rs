use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the loaded sheet
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring what spreadsheet readers hand back.
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
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

/// Text that spreadsheet exports use for a missing value. The `nan`
/// spellings are absent because they already parse as `f64::NAN`.
const MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN", "<NA>", "N/A",
    "NA", "NULL", "None", "n/a", "null",
];

/// `true` for blank text or a missing-value marker such as `NA` or `#N/A`.
pub fn is_missing_token(s: &str) -> bool {
    let s = s.trim();
    s.is_empty() || MISSING_TOKENS.contains(&s)
}

impl CellValue {
    /// Parse a textual cell the way a CSV reader with type inference would.
    ///
    /// `NaN`, `inf` and `-inf` come back as numbers so the cleaner can
    /// reject them later. Missing-value markers become [`CellValue::Empty`].
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if is_missing_token(s) {
            return CellValue::Empty;
        }
        if let Ok(v) = s.parse::<f64>() {
            return CellValue::Number(v);
        }
        match s {
            "true" | "TRUE" | "True" => CellValue::Bool(true),
            "false" | "FALSE" | "False" => CellValue::Bool(false),
            _ => CellValue::Text(s.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded sheet
// ---------------------------------------------------------------------------

/// Rows × positional columns. Every row has exactly `column_names.len()` cells.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Header row; unnamed columns get `Unnamed: <index>`.
    pub column_names: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table, padding short rows with `Empty` and widening the
    /// header when a row is longer than it.
    pub fn new(mut column_names: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(column_names.len());

        for (i, name) in column_names.iter_mut().enumerate() {
            if name.trim().is_empty() {
                *name = unnamed(i);
            }
        }
        while column_names.len() < width {
            column_names.push(unnamed(column_names.len()));
        }
        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }

        Table { column_names, rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.column_names.len()
    }

    /// Cell at (row, column); `None` when out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}

fn unnamed(index: usize) -> String {
    format!("Unnamed: {index}")
}

// ---------------------------------------------------------------------------
// SpecLimits – fixed specification limits shared by every group
// ---------------------------------------------------------------------------

/// Lower/upper specification limits; constants, not derived from data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpecLimits {
    pub lower: f64,
    pub upper: f64,
}

impl SpecLimits {
    pub const LOWER: f64 = 81.2;
    pub const UPPER: f64 = 82.2;

    /// Whether `value` lies inside the closed interval [lower, upper].
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl Default for SpecLimits {
    fn default() -> Self {
        Self {
            lower: Self::LOWER,
            upper: Self::UPPER,
        }
    }
}
