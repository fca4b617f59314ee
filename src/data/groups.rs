use std::fmt;
use std::ops::Range;

use serde::Serialize;

use super::model::{CellValue, Table};
use crate::error::{PipelineError, PipelineResult};

// ---------------------------------------------------------------------------
// MeasurementGroup – the four part conditions
// ---------------------------------------------------------------------------

/// One of the four part conditions measured in the sheet.
///
/// The column ranges are fixed by the sheet layout. Columns 5, 9–13 and 17
/// sit between the groups and are never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MeasurementGroup {
    Molding,
    Painting,
    PaintingWithoutOven,
    MoldingPlusOven,
}

impl MeasurementGroup {
    /// Display order for charts and the comparison.
    pub const ALL: [MeasurementGroup; 4] = [
        MeasurementGroup::Molding,
        MeasurementGroup::Painting,
        MeasurementGroup::PaintingWithoutOven,
        MeasurementGroup::MoldingPlusOven,
    ];

    /// Zero-indexed, half-open column range (sheet letters C–E, G–I, O–Q, S–U).
    pub fn columns(self) -> Range<usize> {
        match self {
            MeasurementGroup::Molding => 2..5,
            MeasurementGroup::Painting => 6..9,
            MeasurementGroup::PaintingWithoutOven => 14..17,
            MeasurementGroup::MoldingPlusOven => 18..21,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MeasurementGroup::Molding => "Molding",
            MeasurementGroup::Painting => "Painting",
            MeasurementGroup::PaintingWithoutOven => "PaintingWithoutOven",
            MeasurementGroup::MoldingPlusOven => "MoldingPlusOven",
        }
    }

    /// Chart title, e.g. `Molding Measurements`.
    pub fn title(self) -> String {
        format!("{} Measurements", self.name())
    }

    /// Position in [`MeasurementGroup::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MeasurementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of columns a table needs for every group range to be addressable.
pub fn required_columns() -> usize {
    MeasurementGroup::ALL
        .iter()
        .map(|g| g.columns().end)
        .max()
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Fail fast when the sheet is too narrow for the hardcoded ranges.
pub fn validate_layout(table: &Table) -> PipelineResult<()> {
    let required = required_columns();
    if table.n_columns() < required {
        return Err(PipelineError::InsufficientColumns {
            found: table.n_columns(),
            required,
        });
    }
    Ok(())
}

/// Flatten the group's three columns over all rows (row-major).
///
/// Empty cells become `None`; text or boolean cells abort the run.
pub fn extract(table: &Table, group: MeasurementGroup) -> PipelineResult<Vec<Option<f64>>> {
    validate_layout(table)?;

    let columns = group.columns();
    let mut values = Vec::with_capacity(table.n_rows() * columns.len());

    for row in 0..table.n_rows() {
        for column in columns.clone() {
            let value = match table.cell(row, column) {
                Some(CellValue::Number(v)) => Some(*v),
                Some(CellValue::Empty) | None => None,
                Some(other) => {
                    return Err(PipelineError::NonNumericCell {
                        group,
                        row,
                        column,
                        value: other.to_string(),
                    })
                }
            };
            values.push(value);
        }
    }

    Ok(values)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Table of `n_columns` columns where every measurement cell holds
    /// `row * 100 + column`.
    pub(crate) fn numbered_table(n_rows: usize, n_columns: usize) -> Table {
        let header = (0..n_columns).map(|c| format!("c{c}")).collect();
        let rows = (0..n_rows)
            .map(|r| {
                (0..n_columns)
                    .map(|c| CellValue::Number((r * 100 + c) as f64))
                    .collect()
            })
            .collect();
        Table::new(header, rows)
    }

    #[test]
    fn ranges_match_sheet_layout() {
        assert_eq!(MeasurementGroup::Molding.columns(), 2..5);
        assert_eq!(MeasurementGroup::Painting.columns(), 6..9);
        assert_eq!(MeasurementGroup::PaintingWithoutOven.columns(), 14..17);
        assert_eq!(MeasurementGroup::MoldingPlusOven.columns(), 18..21);
        assert_eq!(required_columns(), 21);
    }

    #[test]
    fn every_group_yields_rows_times_three() {
        let table = numbered_table(7, 21);
        for group in MeasurementGroup::ALL {
            let values = extract(&table, group).expect("extract");
            assert_eq!(values.len(), 7 * 3, "{group}");
        }
    }

    #[test]
    fn extraction_reads_only_the_group_columns() {
        let table = numbered_table(2, 22);
        let values = extract(&table, MeasurementGroup::PaintingWithoutOven).expect("extract");
        assert_eq!(
            values,
            vec![14.0, 15.0, 16.0, 114.0, 115.0, 116.0]
                .into_iter()
                .map(Some)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn empty_cells_become_none() {
        let mut table = numbered_table(1, 21);
        table.rows[0][3] = CellValue::Empty;
        let values = extract(&table, MeasurementGroup::Molding).expect("extract");
        assert_eq!(values, vec![Some(2.0), None, Some(4.0)]);
    }

    #[test]
    fn twenty_columns_is_insufficient() {
        let table = numbered_table(3, 20);
        let err = extract(&table, MeasurementGroup::Molding).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InsufficientColumns {
                found: 20,
                required: 21
            }
        ));
    }

    #[test]
    fn text_in_a_measurement_column_is_reported() {
        let mut table = numbered_table(2, 21);
        table.rows[1][19] = CellValue::Text("n/a".into());
        let err = extract(&table, MeasurementGroup::MoldingPlusOven).unwrap_err();
        assert_eq!(
            err.to_string(),
            "MoldingPlusOven column 19, row 1: 'n/a' is not a number"
        );
    }

    #[test]
    fn text_outside_the_ranges_is_ignored() {
        let mut table = numbered_table(1, 21);
        table.rows[0][5] = CellValue::Text("separator".into());
        table.rows[0][0] = CellValue::Text("Part 1".into());
        for group in MeasurementGroup::ALL {
            assert!(extract(&table, group).is_ok());
        }
    }
}
