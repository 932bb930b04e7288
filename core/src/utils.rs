//! Numeric helpers shared by descriptor calculations.

/// Variances at or below this value are treated as zero.
pub(crate) const VARIANCE_TOLERANCE: f64 = 1e-12;

/// Returns the arithmetic mean of the values.
///
/// The mean of an empty iterator is nan.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), x| (sum + x, n + 1));

    sum / n as f64
}

/// Returns the population variance of the values.
///
/// The variance of an empty iterator is nan.
pub fn variance<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();
    let mean = mean(iter.clone());

    self::mean(iter.map(|x| (x - mean).powi(2)))
}

/// Returns `true` if the variance is indistinguishable from zero.
pub(crate) fn is_degenerate(variance: f64) -> bool {
    !(variance > VARIANCE_TOLERANCE)
}
