// ---------------------------------------------------------------------------
// Column statistics: closed-form aggregates used by the derived view
// ---------------------------------------------------------------------------

/// Arithmetic mean. NaN on an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Minimum. NaN on an empty slice.
pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Maximum. NaN on an empty slice.
pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Pearson correlation coefficient between two equal-length columns.
///
/// NaN when either column is empty or has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return f64::NAN;
    }
    let mx = mean(&x[..n]);
    let my = mean(&y[..n]);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for i in 0..n {
        let dx = x[i] - mx;
        let dy = y[i] - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        sxy / denom
    }
}

// ---------------------------------------------------------------------------
// Ordinary-least-squares line
// ---------------------------------------------------------------------------

/// Least-squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fitted y at the given x.
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// OLS fit over two equal-length columns.
///
/// None when fewer than 2 points or x has zero variance.
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    let n = x.len().min(y.len());
    if n < 2 {
        return None;
    }
    let mx = mean(&x[..n]);
    let my = mean(&y[..n]);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for i in 0..n {
        let dx = x[i] - mx;
        sxy += dx * (y[i] - my);
        sxx += dx * dx;
    }

    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: my - slope * mx,
    })
}

// ---------------------------------------------------------------------------
// Equal-width histogram
// ---------------------------------------------------------------------------

/// Equal-width histogram over a column's full value range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Per-bin counts, left to right.
    pub counts: Vec<usize>,
    /// Left edge of the first bin.
    pub start: f64,
    pub bin_width: f64,
}

impl Histogram {
    /// Center of bin `i`, for bar placement.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.bin_width
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin all values into `n_bins` equal-width bins spanning min..max.
///
/// Values equal to the maximum land in the last bin. A zero-span column (all
/// values identical) collapses into the first bin with unit width.
pub fn histogram(values: &[f64], n_bins: usize) -> Histogram {
    let n_bins = n_bins.max(1);
    let mut counts = vec![0usize; n_bins];

    if values.is_empty() {
        return Histogram {
            counts,
            start: 0.0,
            bin_width: 1.0,
        };
    }

    let lo = min(values);
    let span = max(values) - lo;
    if span <= 0.0 {
        counts[0] = values.len();
        return Histogram {
            counts,
            start: lo - 0.5,
            bin_width: 1.0,
        };
    }

    let bin_width = span / n_bins as f64;
    for &v in values {
        let idx = (((v - lo) / bin_width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    Histogram {
        counts,
        start: lo,
        bin_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_max() {
        let vals = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(mean(&vals), 2.5);
        assert_eq!(max(&vals), 4.0);
        assert_eq!(min(&vals), 1.0);
        assert!(mean(&[]).is_nan());
        assert!(max(&[]).is_nan());
    }

    #[test]
    fn pearson_perfect_positive() {
        let x = [100.0, 200.0];
        let y = [10.0, 20.0];
        assert_eq!(pearson(&x, &y), 1.0);
    }

    #[test]
    fn pearson_perfect_negative() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 1.0, 0.0];
        assert_eq!(pearson(&x, &y), -1.0);
    }

    #[test]
    fn pearson_is_bounded() {
        let x = [1.0, 4.0, 2.0, 8.0, 5.0, 7.0];
        let y = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        let r = pearson(&x, &y);
        assert!((-1.0..=1.0).contains(&r));
    }

    #[test]
    fn pearson_degenerate_is_nan() {
        assert!(pearson(&[], &[]).is_nan());
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
    }

    #[test]
    fn linear_fit_recovers_exact_line() {
        // y = 2x + 1
        let x = [0.0, 1.0, 2.0];
        let y = [1.0, 3.0, 5.0];
        let fit = linear_fit(&x, &y).unwrap();
        assert_eq!(fit.slope, 2.0);
        assert_eq!(fit.intercept, 1.0);
        assert_eq!(fit.at(10.0), 21.0);
    }

    #[test]
    fn linear_fit_degenerate_is_none() {
        assert!(linear_fit(&[1.0], &[2.0]).is_none());
        assert!(linear_fit(&[3.0, 3.0], &[1.0, 2.0]).is_none());
    }

    #[test]
    fn histogram_bins_every_value() {
        let values: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let hist = histogram(&values, 30);
        assert_eq!(hist.counts.len(), 30);
        assert_eq!(hist.total(), 30);
        // Maximum lands in the last bin, not past it.
        assert!(hist.counts[29] >= 1);
    }

    #[test]
    fn histogram_zero_span() {
        let hist = histogram(&[5.0, 5.0, 5.0], 30);
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.counts[0], 3);
        assert_eq!(hist.bin_width, 1.0);
    }

    #[test]
    fn histogram_empty() {
        let hist = histogram(&[], 30);
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.counts.len(), 30);
    }
}
