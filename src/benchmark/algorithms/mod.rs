//! Sorting algorithms under benchmark
//!
//! Every algorithm copies its input and sorts the copy, so the caller's
//! sequence is never mutated and the output never aliases it.

pub mod bubble;
pub mod insertion;

use crate::constants;

pub use bubble::{bubble_sort, bubble_sort_with_stats};
pub use insertion::insertion_sort;

/// Signature shared by all sort functions
pub type SortFn = fn(&[i64]) -> Vec<i64>;

/// Counters collected while sorting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Outer passes over the data
    pub passes: usize,
    /// Adjacent swaps performed
    pub swaps: usize,
}

/// Algorithm registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Bubble,
}

impl Algorithm {
    /// All algorithms in benchmark order
    pub const ALL: [Algorithm; 2] = [Algorithm::Insertion, Algorithm::Bubble];

    /// Display name, also written to the results file
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insertion => constants::algorithms::INSERTION_SORT,
            Self::Bubble => constants::algorithms::BUBBLE_SORT,
        }
    }

    /// The sort function for this algorithm
    pub fn function(&self) -> SortFn {
        match self {
            Self::Insertion => insertion_sort,
            Self::Bubble => bubble_sort,
        }
    }

    /// Sort a copy of `data`
    pub fn sort(&self, data: &[i64]) -> Vec<i64> {
        (self.function())(data)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn random_sequences() -> Vec<Vec<i64>> {
        let mut rng = rand::rng();
        (0..50)
            .map(|_| {
                let len = rng.random_range(0..64);
                (0..len).map(|_| rng.random_range(-20..20)).collect()
            })
            .collect()
    }

    fn counts(data: &[i64]) -> std::collections::BTreeMap<i64, usize> {
        let mut map = std::collections::BTreeMap::new();
        for value in data {
            *map.entry(*value).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn test_sorted_permutation_of_input() {
        for algorithm in Algorithm::ALL {
            for input in random_sequences() {
                let sorted = algorithm.sort(&input);
                assert!(sorted.is_sorted(), "{algorithm} left {sorted:?} unsorted");
                assert_eq!(counts(&sorted), counts(&input));
            }
        }
    }

    #[test]
    fn test_input_not_mutated() {
        for algorithm in Algorithm::ALL {
            for input in random_sequences() {
                let snapshot = input.clone();
                let _ = algorithm.sort(&input);
                assert_eq!(input, snapshot);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for algorithm in Algorithm::ALL {
            for input in random_sequences() {
                let once = algorithm.sort(&input);
                assert_eq!(algorithm.sort(&once), once);
            }
        }
    }

    #[test]
    fn test_empty_and_singleton() {
        for algorithm in Algorithm::ALL {
            assert!(algorithm.sort(&[]).is_empty());
            assert_eq!(algorithm.sort(&[42]), vec![42]);
        }
    }

    #[test]
    fn test_matches_std_sort() {
        let input = vec![9, -3, 7, 7, 0, i64::MAX, i64::MIN, 2];
        let mut expected = input.clone();
        expected.sort();

        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.sort(&input), expected);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Algorithm::Insertion.to_string(), "Insertion Sort");
        assert_eq!(Algorithm::Bubble.name(), "Bubble Sort");
    }
}
