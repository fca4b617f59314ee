use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::groups::MeasurementGroup;

/// Dashed LSL / USL reference lines.
pub const LIMIT_COLOR: Color32 = Color32::RED;

/// Dashed sample-mean reference line.
pub const MEAN_COLOR: Color32 = Color32::BLUE;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Offset so the first group is not pure red like the limit lines.
            let hue = 200.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Group colours
// ---------------------------------------------------------------------------

/// One fixed colour per measurement group, shared by every chart.
#[derive(Debug, Clone)]
pub struct GroupPalette {
    colors: Vec<Color32>,
}

impl Default for GroupPalette {
    fn default() -> Self {
        Self {
            colors: generate_palette(MeasurementGroup::ALL.len()),
        }
    }
}

impl GroupPalette {
    pub fn color_for(&self, group: MeasurementGroup) -> Color32 {
        self.colors
            .get(group.index())
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}
