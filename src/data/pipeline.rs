use std::path::Path;

use super::clean::clean;
use super::compare::Comparison;
use super::distribution::GroupDistribution;
use super::groups::{extract, validate_layout, MeasurementGroup};
use super::loader::load_file;
use super::model::{SpecLimits, Table};
use crate::error::PipelineResult;

// ---------------------------------------------------------------------------
// Dashboard – the complete result of one run
// ---------------------------------------------------------------------------

/// Everything the window shows after a successful open.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// File name the table was read from.
    pub source: String,
    /// Raw loaded sheet, shown as-is.
    pub table: Table,
    pub limits: SpecLimits,
    /// One per group, in [`MeasurementGroup::ALL`] order.
    pub distributions: Vec<GroupDistribution>,
    pub comparison: Comparison,
}

/// Load `path` and run the whole pipeline. Any stage failure aborts the run.
pub fn run(path: &Path, limits: SpecLimits) -> PipelineResult<Dashboard> {
    let table = load_file(path)?;
    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.n_rows(),
        table.n_columns(),
        path.display()
    );

    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    analyze(source, table, limits)
}

/// Validate → extract → clean → distributions → comparison, on an already
/// loaded table.
pub fn analyze(source: String, table: Table, limits: SpecLimits) -> PipelineResult<Dashboard> {
    validate_layout(&table)?;

    let mut distributions = Vec::with_capacity(MeasurementGroup::ALL.len());
    for group in MeasurementGroup::ALL {
        let raw = extract(&table, group)?;
        let cleaned = clean(&raw);
        log::debug!(
            "{group}: {} raw cell(s), {} after cleaning",
            raw.len(),
            cleaned.len()
        );
        distributions.push(GroupDistribution::build(group, cleaned, limits));
    }

    let comparison = Comparison::build(
        distributions
            .iter()
            .map(|d| (d.group, d.values.as_slice())),
    );

    for (group, summary) in &comparison.boxes {
        if let Some(b) = summary.as_ref().filter(|b| !b.outliers.is_empty()) {
            log::debug!("{group}: {} outlier(s) beyond 1.5 IQR", b.outliers.len());
        }
    }

    log::info!(
        "Analyzed {} ({} comparison rows): {}",
        source,
        comparison.len(),
        distributions
            .iter()
            .map(|d| format!("{}={}", d.group, d.values.len()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(Dashboard {
        source,
        table,
        limits,
        distributions,
        comparison,
    })
}
