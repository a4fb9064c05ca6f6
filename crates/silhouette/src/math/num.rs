use super::FloatNum;

/// fold values into `(min, max)`, `None` when the iterator is empty
pub(crate) fn min_max(values: impl IntoIterator<Item = FloatNum>) -> Option<(FloatNum, FloatNum)> {
    values.into_iter().fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

#[inline]
pub(crate) fn is_nearly_zero(value: FloatNum, tolerance: FloatNum) -> bool {
    value.abs() < tolerance
}
