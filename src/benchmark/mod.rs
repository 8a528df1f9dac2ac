//! Benchmark execution engine
//!
//! - **Algorithms** (`algorithms/`): the sort functions under test
//! - **Instrumentation** (`instrumentation.rs`): clock and heap probes
//! - **Runner** (`runner.rs`): measures a single sort call
//! - **Metrics** (`metrics.rs`): collects results and summarizes a run

pub mod algorithms;
pub mod instrumentation;
pub mod metrics;
pub mod runner;

pub use algorithms::{Algorithm, SortFn, SortStats};
pub use instrumentation::{Instrumentation, SystemProbe, TrackingAllocator};
pub use metrics::MetricsCollector;
pub use runner::BenchmarkRunner;
