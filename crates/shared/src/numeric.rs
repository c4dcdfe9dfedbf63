//! Division-safe helpers used by the aggregators.
//!
//! Every helper returns `0.0` where a naive division would yield `NaN` or infinity.

/// Divides `numerator` by `denominator`, returning `0.0` when the denominator is zero.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Share of `part` in `total` as a percentage (0-100), or `0.0` when `total` is zero.
pub fn percentage_of(part: f64, total: f64) -> f64 {
    safe_ratio(part, total) * 100.0
}

/// Arithmetic mean of the values, or `0.0` for an empty iterator.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    safe_ratio(sum, count as f64)
}

/// Rounds to the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_ratio() {
        assert_eq!(safe_ratio(10.0, 4.0), 2.5);
        assert_eq!(safe_ratio(10.0, 0.0), 0.0);
        assert_eq!(safe_ratio(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(25.0, 100.0), 25.0);
        assert_eq!(percentage_of(5.0, 0.0), 0.0);
        assert!(!percentage_of(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_mean() {
        assert!((mean(vec![3.2, 5.8]) - 4.5).abs() < 1e-9);
        assert_eq!(mean(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.345_67, 2), 2.35);
        assert_eq!(round_to(58.499, 1), 58.5);
        assert_eq!(round_to(3.0, 0), 3.0);
    }
}
