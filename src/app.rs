use eframe::egui::{self, ScrollArea};

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PaintingStatsApp {
    pub state: AppState,
}

impl PaintingStatsApp {
    /// A file dropped onto the window counts as a new upload.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|file| file.path.clone())
        });
        if let Some(path) = dropped {
            log::info!("File dropped: {}", path.display());
            self.state.open(&path);
        }
    }
}

impl eframe::App for PaintingStatsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: data, charts, comparison ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("📉 Painting Stats Model");
                    ui.separator();
                    panels::dashboard_view(ui, &self.state);
                });
        });
    }
}
