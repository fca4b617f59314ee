use super::groups::MeasurementGroup;
use super::model::SpecLimits;
use super::stats::{self, DensityCurve, Histogram, Summary};

// ---------------------------------------------------------------------------
// GroupDistribution – everything one distribution chart draws
// ---------------------------------------------------------------------------

/// Histogram, density curve and reference lines for one cleaned group.
#[derive(Debug, Clone)]
pub struct GroupDistribution {
    pub group: MeasurementGroup,
    pub title: String,
    /// Cleaned sequence, also drawn as a rug under the axis.
    pub values: Vec<f64>,
    pub mean: Option<f64>,
    pub histogram: Option<Histogram>,
    /// `None` when the sample is too small or has zero variance.
    pub density: Option<DensityCurve>,
    pub limits: SpecLimits,
    pub summary: Summary,
}

impl GroupDistribution {
    /// Compute the chart data for `values`. Never fails: degenerate samples
    /// simply lose their density curve (and histogram, when empty).
    pub fn build(group: MeasurementGroup, values: Vec<f64>, limits: SpecLimits) -> Self {
        let density = stats::kde(&values, stats::KDE_POINTS);
        match &density {
            Some(curve) => log::debug!("{group}: KDE bandwidth {:.4}", curve.bandwidth),
            None => log::warn!(
                "{group}: no density curve for {} value(s) (empty or zero variance)",
                values.len()
            ),
        }

        Self {
            group,
            title: group.title(),
            mean: stats::mean(&values),
            histogram: stats::histogram(&values, stats::BIN_WIDTH),
            density,
            summary: stats::summarize(&values, &limits),
            values,
            limits,
        }
    }

    pub fn lower_label(&self) -> String {
        format!("LSL ({})", self.limits.lower)
    }

    pub fn upper_label(&self) -> String {
        format!("USL ({})", self.limits.upper)
    }

    pub fn mean_label(&self) -> Option<String> {
        self.mean.map(|m| format!("Mean ({m:.2})"))
    }

    /// One-line summary printed under the chart.
    pub fn summary_line(&self) -> String {
        let s = &self.summary;
        let fmt = |v: Option<f64>| v.map_or_else(|| "–".to_string(), |v| format!("{v:.3}"));
        format!(
            "n = {}   mean = {}   sd = {}   min = {}   max = {}   out of spec = {}",
            s.count,
            fmt(s.mean),
            fmt(s.std_dev),
            fmt(s.min),
            fmt(s.max),
            s.out_of_spec
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_use_literal_limits_and_two_decimal_mean() {
        let d = GroupDistribution::build(
            MeasurementGroup::Painting,
            vec![81.0, 81.333, 82.0],
            SpecLimits::default(),
        );
        assert_eq!(d.title, "Painting Measurements");
        assert_eq!(d.lower_label(), "LSL (81.2)");
        assert_eq!(d.upper_label(), "USL (82.2)");
        assert_eq!(d.mean_label().as_deref(), Some("Mean (81.44)"));
    }

    #[test]
    fn empty_group_degrades_without_failing() {
        let d = GroupDistribution::build(
            MeasurementGroup::Molding,
            Vec::new(),
            SpecLimits::default(),
        );
        assert!(d.mean.is_none());
        assert!(d.mean_label().is_none());
        assert!(d.histogram.is_none());
        assert!(d.density.is_none());
        assert_eq!(d.summary.count, 0);
        assert!(d.summary_line().starts_with("n = 0"));
    }

    #[test]
    fn constant_group_has_histogram_but_no_density() {
        let d = GroupDistribution::build(
            MeasurementGroup::MoldingPlusOven,
            vec![81.7; 5],
            SpecLimits::default(),
        );
        assert!(d.histogram.is_some());
        assert!(d.density.is_none());
        assert_eq!(d.mean_label().as_deref(), Some("Mean (81.70)"));
    }
}
