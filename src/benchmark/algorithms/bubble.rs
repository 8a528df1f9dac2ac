//! Bubble sort with early exit

use super::SortStats;

/// Bubble sort over a copy of `data`
pub fn bubble_sort(data: &[i64]) -> Vec<i64> {
    bubble_sort_with_stats(data).0
}

/// Bubble sort that also reports how many passes and swaps it made
///
/// A pass without swaps ends the sort, so sorted input takes exactly one pass.
pub fn bubble_sort_with_stats(data: &[i64]) -> (Vec<i64>, SortStats) {
    let mut result = data.to_vec();
    let mut stats = SortStats::default();
    let n = result.len();

    for i in 0..n {
        stats.passes += 1;
        let mut swapped = false;

        for j in 0..(n - i - 1) {
            if result[j] > result[j + 1] {
                result.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    (result, stats)
}
