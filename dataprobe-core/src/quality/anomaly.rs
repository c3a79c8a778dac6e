//! Outlier detection for numeric columns.
//!
//! Uses the interquartile range with order-statistic quartiles: `q1` and
//! `q3` are taken directly from the sorted values at `floor(0.25 * len)`
//! and `floor(0.75 * len)`, with no interpolation. Values strictly outside
//! `[q1 - k * iqr, q3 + k * iqr]` are outliers.

/// Fewer values than this never produce outliers.
pub const MIN_OUTLIER_SAMPLE: usize = 4;

/// Quartiles and fences computed for one numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrFences {
    /// First quartile
    pub q1: f64,
    /// Third quartile
    pub q3: f64,
    /// Values below this are outliers
    pub lower: f64,
    /// Values above this are outliers
    pub upper: f64,
}

impl IqrFences {
    /// Returns true if `value` lies strictly outside the fences.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Computes IQR fences, or `None` when there are too few values.
pub fn iqr_fences(values: &[f64], multiplier: f64) -> Option<IqrFences> {
    if values.len() < MIN_OUTLIER_SAMPLE {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let len = sorted.len();
    let q1 = sorted[len / 4];
    let q3 = sorted[len * 3 / 4];
    let iqr = q3 - q1;

    Some(IqrFences {
        q1,
        q3,
        lower: q1 - multiplier * iqr,
        upper: q3 + multiplier * iqr,
    })
}

/// Counts IQR outliers among `values`.
pub fn count_outliers(values: &[f64], multiplier: f64) -> u64 {
    match iqr_fences(values, multiplier) {
        Some(fences) => values.iter().filter(|&&v| fences.is_outlier(v)).count() as u64,
        None => 0,
    }
}
