//! Descriptive statistics behind the charts.
//!
//! Histogram binning, Gaussian kernel density estimation and box-plot
//! summaries. All functions take cleaned (finite) samples; order never
//! matters.

use serde::Serialize;

use super::model::SpecLimits;

/// Histogram bin width used for every distribution chart.
pub const BIN_WIDTH: f64 = 0.05;

/// Upper bound on histogram bins; wider data get wider bins.
pub const MAX_BINS: usize = 1000;

/// Evaluation points of the density curve.
pub const KDE_POINTS: usize = 500;

// ---------------------------------------------------------------------------
// Moments
// ---------------------------------------------------------------------------

/// Arithmetic mean, `None` for an empty sample.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample standard deviation (n − 1 denominator), `None` below two points.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 2 {
        return None;
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|x| (x - m).powi(2)).sum();
    Some((ss / (n - 1) as f64).sqrt())
}

/// Quantile of an ascending slice with linear interpolation between
/// order statistics: position = q · (n − 1).
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Fixed-width histogram normalised to probability density.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Left edge of the first bin (the sample minimum).
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
    /// `count / (n · bin_width)`; the bars integrate to 1.
    pub densities: Vec<f64>,
}

impl Histogram {
    /// Centre of bin `i`.
    pub fn center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.bin_width
    }
}

/// Bin `data` into bins of `bin_width` starting at the minimum.
///
/// The last bin is closed on the right. If the range would need more than
/// [`MAX_BINS`] bins the width is stretched to fit.
///
/// # Returns
///
/// `None` for empty data or a non-positive width.
pub fn histogram(data: &[f64], bin_width: f64) -> Option<Histogram> {
    if data.is_empty() || !(bin_width > 0.0) {
        return None;
    }

    let min_val = data.iter().cloned().reduce(f64::min)?;
    let max_val = data.iter().cloned().reduce(f64::max)?;
    let range = max_val - min_val;
    if !range.is_finite() {
        return None;
    }

    // Compare in f64 first: the cast saturates for spans near usize::MAX.
    let raw = (range / bin_width).floor();
    let (n_bins, width) = if raw < MAX_BINS as f64 {
        (raw as usize + 1, bin_width)
    } else {
        (MAX_BINS, range / MAX_BINS as f64)
    };

    let mut counts = vec![0_usize; n_bins];
    for &x in data {
        let bin = ((x - min_val) / width).floor() as usize;
        counts[bin.min(n_bins - 1)] += 1;
    }

    let norm = 1.0 / (data.len() as f64 * width);
    let densities = counts.iter().map(|&c| c as f64 * norm).collect();

    Some(Histogram {
        start: min_val,
        bin_width: width,
        counts,
        densities,
    })
}

// ---------------------------------------------------------------------------
// Kernel density estimation
// ---------------------------------------------------------------------------

/// Smoothed density curve over the sample range.
#[derive(Debug, Clone)]
pub struct DensityCurve {
    pub x: Vec<f64>,
    pub density: Vec<f64>,
    pub bandwidth: f64,
}

/// Gaussian KDE with Scott's rule.
///
/// f̂(x) = (1/nh) Σᵢ φ((x − xᵢ)/h), with h = σ · n^(−1/5) and σ the sample
/// standard deviation. The curve is evaluated at `n_points` evenly spaced
/// points from the sample minimum to the maximum.
///
/// # Returns
///
/// `None` for fewer than two points, fewer than two grid points, or zero
/// variance.
pub fn kde(data: &[f64], n_points: usize) -> Option<DensityCurve> {
    let n = data.len();
    if n < 2 || n_points < 2 {
        return None;
    }

    let sd = std_dev(data)?;
    if !(sd > 1e-300) {
        return None;
    }
    let bandwidth = sd * (n as f64).powf(-0.2);

    let min_val = data.iter().cloned().reduce(f64::min)?;
    let max_val = data.iter().cloned().reduce(f64::max)?;
    let step = (max_val - min_val) / (n_points - 1) as f64;

    let x: Vec<f64> = (0..n_points).map(|i| min_val + i as f64 * step).collect();

    let inv_h = 1.0 / bandwidth;
    let inv_nh = inv_h / n as f64;
    let inv_sqrt_2pi = 1.0 / (2.0 * std::f64::consts::PI).sqrt();

    let density = x
        .iter()
        .map(|&xi| {
            let sum: f64 = data
                .iter()
                .map(|&xj| {
                    let u = (xi - xj) * inv_h;
                    inv_sqrt_2pi * (-0.5 * u * u).exp()
                })
                .sum();
            sum * inv_nh
        })
        .collect();

    Some(DensityCurve {
        x,
        density,
        bandwidth,
    })
}

// ---------------------------------------------------------------------------
// Box plot
// ---------------------------------------------------------------------------

/// Five-number summary with Tukey whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    /// Smallest point ≥ Q1 − 1.5·IQR.
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Largest point ≤ Q3 + 1.5·IQR.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

pub fn box_summary(data: &[f64]) -> Option<BoxSummary> {
    let sorted = sorted_copy(data);
    let q1 = quantile_sorted(&sorted, 0.25)?;
    let median = quantile_sorted(&sorted, 0.5)?;
    let q3 = quantile_sorted(&sorted, 0.75)?;

    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;

    let lower_whisker = sorted
        .iter()
        .cloned()
        .find(|&x| x >= lower_fence)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .cloned()
        .find(|&x| x <= upper_fence)
        .unwrap_or(q3);

    let outliers = sorted
        .iter()
        .cloned()
        .filter(|&x| x < lower_fence || x > upper_fence)
        .collect();

    Some(BoxSummary {
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
        outliers,
    })
}

// ---------------------------------------------------------------------------
// Per-group summary
// ---------------------------------------------------------------------------

/// Headline numbers printed under each chart and exported as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Points outside [LSL, USL].
    pub out_of_spec: usize,
}

pub fn summarize(data: &[f64], limits: &SpecLimits) -> Summary {
    Summary {
        count: data.len(),
        mean: mean(data),
        std_dev: std_dev(data),
        min: data.iter().cloned().reduce(f64::min),
        max: data.iter().cloned().reduce(f64::max),
        out_of_spec: data.iter().filter(|&&v| !limits.contains(v)).count(),
    }
}
