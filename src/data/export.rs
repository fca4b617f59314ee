use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use super::groups::MeasurementGroup;
use super::model::SpecLimits;
use super::pipeline::Dashboard;
use super::stats::Summary;
use crate::error::{PipelineError, PipelineResult};

// ---------------------------------------------------------------------------
// JSON summary export
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DashboardSummary<'a> {
    pub source: &'a str,
    pub limits: SpecLimits,
    pub groups: Vec<GroupSummary<'a>>,
}

#[derive(Debug, Serialize)]
pub struct GroupSummary<'a> {
    pub group: MeasurementGroup,
    #[serde(flatten)]
    pub summary: &'a Summary,
}

impl<'a> DashboardSummary<'a> {
    pub fn from_dashboard(dash: &'a Dashboard) -> Self {
        Self {
            source: &dash.source,
            limits: dash.limits,
            groups: dash
                .distributions
                .iter()
                .map(|d| GroupSummary {
                    group: d.group,
                    summary: &d.summary,
                })
                .collect(),
        }
    }
}

/// Write the per-group summary of `dash` as pretty-printed JSON.
pub fn write_summary(path: &Path, dash: &Dashboard) -> PipelineResult<()> {
    let write = || -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &DashboardSummary::from_dashboard(dash))
            .context("serializing summary")?;
        writer.flush().context("flushing summary")?;
        Ok(())
    };
    write().map_err(PipelineError::Export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::groups::tests::numbered_table;
    use crate::data::pipeline::analyze;
    use serde_json::Value as JsonValue;

    #[test]
    fn summary_json_lists_every_group() {
        let dash = analyze("parts.xlsx".into(), numbered_table(2, 21), SpecLimits::default())
            .expect("pipeline");
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("summary.json");

        write_summary(&path, &dash).expect("export");

        let text = std::fs::read_to_string(&path).expect("read back");
        let json: JsonValue = serde_json::from_str(&text).expect("valid json");
        assert_eq!(json["source"], "parts.xlsx");
        assert_eq!(json["limits"]["lower"], 81.2);
        assert_eq!(json["limits"]["upper"], 82.2);

        let groups = json["groups"].as_array().expect("groups array");
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0]["group"], "Molding");
        assert_eq!(groups[0]["count"], 6);
        assert_eq!(groups[3]["group"], "MoldingPlusOven");
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dash = analyze("x".into(), numbered_table(1, 21), SpecLimits::default())
            .expect("pipeline");
        let dir = tempfile::tempdir().expect("temp dir");
        let err = write_summary(&dir.path().join("nope/summary.json"), &dash).unwrap_err();
        assert!(matches!(err, PipelineError::Export(_)));
        assert!(err.to_string().starts_with("exporting summary: creating"));
    }
}
