use thiserror::Error;

use crate::data::groups::MeasurementGroup;

// ---------------------------------------------------------------------------
// Pipeline failure taxonomy
// ---------------------------------------------------------------------------

/// Every way a single load → extract → clean → render run can fail.
///
/// The UI never inspects the variant; it shows `Error: {err}` and drops
/// whatever the previous run produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("worksheet '{name}' not found (available: {})", .available.join(", "))]
    SheetNotFound { name: String, available: Vec<String> },

    #[error("insufficient columns: found {found}, need at least {required}")]
    InsufficientColumns { found: usize, required: usize },

    #[error("{group} column {column}, row {row}: '{value}' is not a number")]
    NonNumericCell {
        group: MeasurementGroup,
        row: usize,
        column: usize,
        value: String,
    },

    #[error("{0:#}")]
    Read(#[from] anyhow::Error),

    #[error("exporting summary: {0:#}")]
    Export(anyhow::Error),
}

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn read_error_keeps_context_chain() {
        let inner: anyhow::Result<()> = Err(anyhow::anyhow!("bad zip header"));
        let err: PipelineError = inner.context("opening workbook").unwrap_err().into();
        assert_eq!(err.to_string(), "opening workbook: bad zip header");
    }

    #[test]
    fn sheet_not_found_lists_available_sheets() {
        let err = PipelineError::SheetNotFound {
            name: "Sheet1".into(),
            available: vec!["Data".into(), "Notes".into()],
        };
        assert_eq!(
            err.to_string(),
            "worksheet 'Sheet1' not found (available: Data, Notes)"
        );
    }
}
