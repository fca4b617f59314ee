use std::path::Path;

use crate::color::GroupPalette;
use crate::data::export::write_summary;
use crate::data::model::SpecLimits;
use crate::data::pipeline::{self, Dashboard};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Result of the last successful run (None until a file loads).
    pub dashboard: Option<Dashboard>,

    /// Fixed specification limits applied to every run.
    pub limits: SpecLimits,

    /// Colour per measurement group.
    pub palette: GroupPalette,

    /// Error from the last run or export, shown in red.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dashboard: None,
            limits: SpecLimits::default(),
            palette: GroupPalette::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Run the whole pipeline for `path`.
    ///
    /// The previous dashboard is always discarded; on failure only the
    /// error message remains.
    pub fn open(&mut self, path: &Path) {
        self.dashboard = None;
        self.status_message = None;

        match pipeline::run(path, self.limits) {
            Ok(dashboard) => {
                self.dashboard = Some(dashboard);
            }
            Err(e) => {
                log::error!("Pipeline failed for {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Message for the central panel: a failed run leaves nothing else to show.
    pub fn run_error(&self) -> Option<&str> {
        match self.dashboard {
            None => self.status_message.as_deref(),
            Some(_) => None,
        }
    }

    /// Message for the top bar: errors that did not replace the dashboard,
    /// such as a failed export.
    pub fn toolbar_message(&self) -> Option<&str> {
        match self.dashboard {
            Some(_) => self.status_message.as_deref(),
            None => None,
        }
    }

    /// Export the current dashboard summary; no-op when nothing is loaded.
    pub fn export_summary(&mut self, path: &Path) {
        let Some(dashboard) = &self.dashboard else {
            return;
        };
        match write_summary(path, dashboard) {
            Ok(()) => log::info!("Wrote summary to {}", path.display()),
            Err(e) => {
                log::error!("{e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_with_columns(n_columns: usize) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("temp file");
        let header: Vec<String> = (0..n_columns).map(|c| format!("c{c}")).collect();
        writeln!(file, "{}", header.join(",")).expect("header");
        writeln!(file, "{}", vec!["81.6"; n_columns].join(",")).expect("row");
        writeln!(file, "{}", vec!["81.8"; n_columns].join(",")).expect("row");
        file
    }

    #[test]
    fn successful_open_replaces_error() {
        let mut state = AppState::default();
        state.status_message = Some("Error: old".into());

        let file = csv_with_columns(21);
        state.open(file.path());

        assert!(state.status_message.is_none());
        let dash = state.dashboard.as_ref().expect("dashboard");
        assert_eq!(dash.distributions.len(), 4);
    }

    #[test]
    fn failed_open_shows_only_the_error() {
        let mut state = AppState::default();
        state.open(csv_with_columns(21).path());
        assert!(state.dashboard.is_some());

        state.open(csv_with_columns(20).path());
        assert!(state.dashboard.is_none());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Error: insufficient columns: found 20, need at least 21")
        );
    }

    #[test]
    fn each_error_is_shown_in_one_place() {
        let mut state = AppState::default();
        state.open(csv_with_columns(20).path());
        assert!(state.run_error().is_some());
        assert!(state.toolbar_message().is_none());

        state.open(csv_with_columns(21).path());
        let dir = tempfile::tempdir().expect("temp dir");
        state.export_summary(&dir.path().join("missing").join("summary.json"));
        assert!(state.run_error().is_none());
        let msg = state.toolbar_message().expect("export error");
        assert!(msg.starts_with("Error: exporting summary"), "{msg}");
    }

    #[test]
    fn export_without_dashboard_is_a_noop() {
        let mut state = AppState::default();
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("summary.json");
        state.export_summary(&path);
        assert!(!path.exists());
        assert!(state.status_message.is_none());
    }
}
