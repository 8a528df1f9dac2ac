//! Application-wide constants
//!
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// BENCHMARK PLAN
// =============================================================================

/// Data sizes benchmarked by the default plan, in run order
pub const DEFAULT_DATA_SIZES: [usize; 3] = [1000, 5000, 10000];

/// Algorithm display names
pub mod algorithms {
    pub const INSERTION_SORT: &str = "Insertion Sort";
    pub const BUBBLE_SORT: &str = "Bubble Sort";
}

// =============================================================================
// STORAGE DEFAULTS
// =============================================================================

/// Default directory holding `test_data_<size>.json` files
pub const DEFAULT_DATA_DIR: &str = "data/test";

/// Default path of the results file
pub const DEFAULT_RESULTS_PATH: &str = "data/results/rust_results.json";

/// File name prefix for test data files
pub const TEST_DATA_FILE_PREFIX: &str = "test_data_";

// =============================================================================
// LOGGING DEFAULTS
// =============================================================================

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "sortbench=info";

/// Log format identifiers
pub mod log_formats {
    pub const TEXT: &str = "text";
    pub const JSON: &str = "json";
}

// =============================================================================
// UNITS
// =============================================================================

/// Bytes per megabyte (MiB, as reported by the heap probe)
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Time differences below this many seconds count as a tie
pub const TIME_TIE_THRESHOLD_SECONDS: f64 = 1e-6;
