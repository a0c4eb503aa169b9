/// Order statistics over benchmark samples
///
/// Percentiles use linear interpolation between closest ranks
/// (`rank = p / 100 * (n - 1)`), the default of most numeric libraries.

/// Median, 5th and 95th percentile of a sample set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentileBand {
    pub median: f64,
    pub p5: f64,
    pub p95: f64,
}

impl PercentileBand {
    /// `None` when there are no samples.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Some(Self {
            median: median_sorted(&sorted)?,
            p5: percentile_sorted(&sorted, 5.0)?,
            p95: percentile_sorted(&sorted, 95.0)?,
        })
    }
}

/// Middle value, or the mean of the two middle values for even counts.
pub fn median_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Linearly interpolated `p`-th percentile (0..=100) of ascending `sorted`.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }

    let rank = p / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    let (a, b) = (sorted[lo], sorted[hi]);
    // Interpolate from the nearer end, as numpy does, so results match bit for bit.
    if frac >= 0.5 {
        Some(b - (b - a) * (1.0 - frac))
    } else {
        Some(a + (b - a) * frac)
    }
}
