use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Line, LineStyle,
    MarkerShape, Plot, PlotPoint, PlotPoints, PlotUi, Points, Text, VLine,
};

use crate::color::{GroupPalette, LIMIT_COLOR, MEAN_COLOR};
use crate::data::compare::Comparison;
use crate::data::distribution::GroupDistribution;
use crate::data::groups::MeasurementGroup;

const DISTRIBUTION_HEIGHT: f32 = 300.0;
const COMPARISON_HEIGHT: f32 = 420.0;

// ---------------------------------------------------------------------------
// Distribution chart (histogram + density + reference lines)
// ---------------------------------------------------------------------------

/// Histogram, density curve and rug for one group, with dashed LSL, USL and
/// mean lines.
pub fn distribution_plot(ui: &mut Ui, dist: &GroupDistribution, palette: &GroupPalette) {
    let color = palette.color_for(dist.group);

    let peak = dist
        .histogram
        .iter()
        .flat_map(|h| h.densities.iter())
        .chain(dist.density.iter().flat_map(|c| c.density.iter()))
        .cloned()
        .fold(0.0_f64, f64::max);
    let top = if peak > 0.0 { peak * 1.1 } else { 1.0 };

    Plot::new(("distribution", dist.group.index()))
        .height(DISTRIBUTION_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Measurement")
        .y_axis_label("Density")
        .allow_scroll(false)
        .show(ui, |plot_ui: &mut PlotUi| {
            if let Some(h) = &dist.histogram {
                let bars = h
                    .densities
                    .iter()
                    .enumerate()
                    .map(|(i, &d)| {
                        Bar::new(h.center(i), d)
                            .width(h.bin_width)
                            .name(format!("{} pts", h.counts[i]))
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(&dist.title)
                        .color(color.gamma_multiply(0.6)),
                );
            }

            if let Some(curve) = &dist.density {
                let points: PlotPoints = curve
                    .x
                    .iter()
                    .zip(curve.density.iter())
                    .map(|(&x, &y)| [x, y])
                    .collect();
                plot_ui.line(Line::new(points).name(&dist.title).color(color).width(2.0));
            }

            // Rug just below the axis.
            if !dist.values.is_empty() {
                let rug_y = -0.04 * top;
                let rug: PlotPoints = dist.values.iter().map(|&v| [v, rug_y]).collect();
                plot_ui.points(
                    Points::new(rug)
                        .shape(MarkerShape::Diamond)
                        .radius(2.0)
                        .color(color),
                );
            }

            reference_line(plot_ui, dist.limits.lower, &dist.lower_label(), LIMIT_COLOR, top);
            reference_line(plot_ui, dist.limits.upper, &dist.upper_label(), LIMIT_COLOR, top);
            if let (Some(mean), Some(label)) = (dist.mean, dist.mean_label()) {
                reference_line(plot_ui, mean, &label, MEAN_COLOR, top * 0.9);
            }
        });

    if dist.values.is_empty() {
        ui.label(RichText::new("No valid measurements").color(Color32::GRAY));
    }
}

/// Dashed vertical line with its label written at `label_y`.
fn reference_line(plot_ui: &mut PlotUi, x: f64, label: &str, color: Color32, label_y: f64) {
    plot_ui.vline(
        VLine::new(x)
            .name(label)
            .color(color)
            .style(LineStyle::dashed_loose())
            .width(1.5),
    );
    plot_ui.text(
        Text::new(PlotPoint::new(x, label_y), RichText::new(label).color(color))
            .anchor(Align2::LEFT_TOP),
    );
}

// ---------------------------------------------------------------------------
// Comparison box plot
// ---------------------------------------------------------------------------

/// Horizontal offset in [-0.2, 0.2) for the `i`-th point of a category.
fn jitter(i: usize) -> f64 {
    ((i as f64 * 0.618_033_988_749_895).fract() - 0.5) * 0.4
}

/// One box per part condition with every measurement overlaid.
pub fn comparison_plot(ui: &mut Ui, comparison: &Comparison, palette: &GroupPalette) {
    Plot::new("comparison_plot")
        .height(COMPARISON_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Part Condition")
        .y_axis_label("Measurement Value")
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 4.0, 8.0]))
        .x_axis_formatter(|mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            MeasurementGroup::ALL
                .get(i as usize)
                .map(|g| g.name().to_string())
                .unwrap_or_default()
        })
        .allow_scroll(false)
        .show(ui, |plot_ui: &mut PlotUi| {
            for (group, summary) in &comparison.boxes {
                let color = palette.color_for(*group);
                let x = group.index() as f64;

                if let Some(b) = summary {
                    let elem = BoxElem::new(
                        x,
                        BoxSpread::new(b.lower_whisker, b.q1, b.median, b.q3, b.upper_whisker),
                    )
                    .name(group.name())
                    .box_width(0.5)
                    .whisker_width(0.25);
                    plot_ui.box_plot(BoxPlot::new(vec![elem]).name(group.name()).color(color));
                }

                let points: PlotPoints = comparison
                    .values_for(*group)
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| [x + jitter(i), v])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .radius(2.0)
                        .color(color.gamma_multiply(0.7))
                        .name(group.name()),
                );
            }
        });

    if comparison.is_empty() {
        ui.label(RichText::new("No valid measurements in any group").color(Color32::GRAY));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_stays_inside_the_box_width() {
        for i in 0..10_000 {
            let j = jitter(i);
            assert!((-0.2..0.2).contains(&j), "{i}: {j}");
        }
    }
}
