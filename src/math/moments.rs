//! Descriptive moments over value slices
//!
//! Both functions return `None` for an empty slice so callers decide how an
//! empty population is reported instead of receiving a silent `NaN`.

use num_traits::Float;

/// Arithmetic mean of the values
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let count = T::from(values.len())?;
    let sum = values.iter().fold(T::zero(), |acc, &value| acc + value);
    Some(sum / count)
}

/// Population standard deviation (divides by `n`, not `n - 1`)
///
/// Uses the two-pass formulation: squared deviations are taken from the
/// already computed mean, which keeps identical inputs at exactly zero.
pub fn population_std_dev<T: Float>(values: &[T]) -> Option<T> {
    let centre = mean(values)?;
    let count = T::from(values.len())?;
    let squared = values.iter().fold(T::zero(), |acc, &value| {
        let deviation = value - centre;
        deviation.mul_add(deviation, acc)
    });
    Some((squared / count).sqrt())
}
