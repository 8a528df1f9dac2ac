//! SortBench - Sorting Algorithm Benchmark Harness
//!
//! This library benchmarks elementary comparison sorts against shared,
//! externally generated test data and persists the measurements as JSON.
//!
//! # Features
//!
//! - Insertion sort and bubble sort over copies of the input
//! - Wall-clock timing and heap snapshots behind a mockable probe
//! - Per-size skip-and-continue when test data is missing or malformed
//! - Pretty-printed JSON results, one record per (algorithm, size) run
//!
//! # Architecture
//!
//! - **Benchmark**: algorithms, instrumentation, runner and metrics
//! - **Services**: the benchmark plan and its orchestration
//! - **Storage**: test data and results files
//! - **Models**: the result record

pub mod benchmark;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{BenchError, BenchResult};
pub use models::BenchmarkResult;
pub use services::{BenchmarkPlan, BenchmarkService};
