//! Benchmark result models

use serde::{Deserialize, Serialize};

use crate::constants::BYTES_PER_MB;

/// Measurement of one algorithm against one input sequence
///
/// Field names are the on-disk keys of the results file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Display name of the algorithm
    pub algorithm: String,
    /// Length of the loaded input (not the nominal size from the file name)
    pub data_size: usize,
    /// Wall-clock time of the sort call in seconds
    pub execution_time: f64,
    /// `final_memory_mb - initial_memory_mb`; may be negative
    pub memory_used_mb: f64,
    pub initial_memory_mb: f64,
    pub final_memory_mb: f64,
}

impl BenchmarkResult {
    /// Build a result from raw measurements
    pub fn from_measurements(
        algorithm: &str,
        data_size: usize,
        execution_time: f64,
        initial_memory_mb: f64,
        final_memory_mb: f64,
    ) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            data_size,
            execution_time,
            memory_used_mb: final_memory_mb - initial_memory_mb,
            initial_memory_mb,
            final_memory_mb,
        }
    }
}

/// Convert a byte count to megabytes
pub fn bytes_to_mb(bytes: usize) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_used_is_delta() {
        let result = BenchmarkResult::from_measurements("Bubble Sort", 1000, 0.25, 10.5, 10.25);
        assert_eq!(result.algorithm, "Bubble Sort");
        assert_eq!(result.data_size, 1000);
        assert!((result.memory_used_mb + 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_serialized_field_names() {
        let result = BenchmarkResult::from_measurements("Insertion Sort", 5, 0.001, 1.0, 1.5);
        let value = serde_json::to_value(&result).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "algorithm",
            "data_size",
            "execution_time",
            "memory_used_mb",
            "initial_memory_mb",
            "final_memory_mb",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 6);
        assert_eq!(value["data_size"], 5);
    }

    #[test]
    fn test_bytes_to_mb() {
        assert_eq!(bytes_to_mb(0), 0.0);
        assert_eq!(bytes_to_mb(1024 * 1024), 1.0);
        assert_eq!(bytes_to_mb(512 * 1024), 0.5);
    }
}
