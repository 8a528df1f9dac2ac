//! Insertion sort

/// Stable insertion sort over a copy of `data`
pub fn insertion_sort(data: &[i64]) -> Vec<i64> {
    let mut result = data.to_vec();

    for i in 1..result.len() {
        let key = result[i];
        let mut j = i;
        while j > 0 && result[j - 1] > key {
            result[j] = result[j - 1];
            j -= 1;
        }
        result[j] = key;
    }

    result
}
