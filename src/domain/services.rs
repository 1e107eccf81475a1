//! Pure computations shared by the demos.

/// Arithmetic mean of `values`; an empty slice yields exactly `0.0`.
pub fn mean(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) as f64 / values.len() as f64
}

/// Sum by element traversal. Accumulates in `i64` so any slice of `i32` fits.
pub fn sum(values: &[i32]) -> i64 {
    values.iter().map(|&v| i64::from(v)).sum()
}

/// Sum by index traversal; always equal to [`sum`].
#[allow(clippy::needless_range_loop)]
pub fn sum_indexed(values: &[i32]) -> i64 {
    let mut total = 0i64;
    for i in 0..values.len() {
        total += i64::from(values[i]);
    }
    total
}

/// Linear scan for the best item. A candidate replaces the current best only
/// when `outranks(candidate, best)` holds, so ties keep the earlier item.
pub fn best_by<'a, T, F>(items: &'a [T], outranks: F) -> Option<&'a T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut iter = items.iter();
    let mut best = iter.next()?;
    for candidate in iter {
        if outranks(candidate, best) {
            best = candidate;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_uses_float_division() {
        assert_eq!(mean(&[90, 85, 88]), 263.0 / 3.0);
        assert_eq!(mean(&[1, 2]), 1.5);
        assert_eq!(mean(&[-4, 4]), 0.0);
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
        assert_eq!(sum(&[]), 0);
        assert_eq!(sum(&[i32::MAX, i32::MAX]), 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_sum_indexed_matches_sum() {
        let cases: [&[i32]; 4] = [&[], &[7], &[1, 2, 3, 4, 5], &[-10, 3, 99, -1]];
        for values in cases {
            assert_eq!(sum_indexed(values), sum(values));
        }
    }

    #[test]
    fn test_best_by_empty() {
        let empty: [i32; 0] = [];
        assert!(best_by(&empty, |a, b| a > b).is_none());
    }

    #[test]
    fn test_best_by_first_wins_on_tie() {
        let items = [(1, 'a'), (3, 'b'), (3, 'c'), (2, 'd')];
        let best = best_by(&items, |a, b| a.0 > b.0).unwrap();
        assert_eq!(*best, (3, 'b'));
    }
}
