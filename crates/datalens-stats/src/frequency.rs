//! Frequency-based statistics over values of any hashable type.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

/// Returns the most frequent values in a single pass.
///
/// The running maximum frequency and the values currently achieving it are
/// tracked while counting; ties are all returned, in the order in which each
/// value reached the maximum frequency. The result is empty only for empty input.
///
/// # Examples
///
/// ```
/// use datalens_stats::frequency::modes;
///
/// assert_eq!(modes([1, 1, 2, 2, 3]), [1, 2]);
/// assert_eq!(modes(["a", "b", "b"]), ["b"]);
/// assert!(modes(Vec::<u8>::new()).is_empty());
/// ```
pub fn modes<I, T>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut counts = HashMap::<T, usize>::new();
    let mut max_count = 0;
    let mut modes = vec![];

    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        *count += 1;
        if *count > max_count {
            max_count = *count;
            modes.clear();
            modes.push(value);
        } else if *count == max_count {
            modes.push(value);
        }
    }

    modes
}

/// Returns the distinct values, preserving the order of first occurrence.
///
/// ```
/// use datalens_stats::frequency::distinct;
///
/// assert_eq!(distinct(["a", "b", "a", "c", "b"]), ["a", "b", "c"]);
/// ```
pub fn distinct<I, T>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_all_unique_returns_everything() {
        assert_eq!(modes([3, 1, 2]), [3, 1, 2]);
    }

    #[test]
    fn test_modes_order_follows_reaching_max() {
        // 2 reaches frequency 2 before 1 does
        assert_eq!(modes([1, 2, 2, 1]), [2, 1]);
    }

    #[test]
    fn test_modes_later_value_overtakes() {
        assert_eq!(modes([1, 2, 2, 3, 3, 3]), [3]);
    }

    #[test]
    fn test_distinct_empty() {
        assert!(distinct(Vec::<i32>::new()).is_empty());
    }
}
