//! Benchmark runner - Measures a single sort call

use std::hint::black_box;

use crate::models::BenchmarkResult;

use super::instrumentation::Instrumentation;

/// Wraps sort calls with timing and heap snapshots
pub struct BenchmarkRunner<I> {
    probe: I,
}

impl<I: Instrumentation> BenchmarkRunner<I> {
    /// Create a new benchmark runner
    pub fn new(probe: I) -> Self {
        Self { probe }
    }

    /// Run `sort` once over `data` and record the measurement
    ///
    /// Order: quiesce, initial snapshot, start timer, sort, stop timer,
    /// final snapshot.
    pub fn measure<F>(&mut self, sort: F, data: &[i64], algorithm_name: &str) -> BenchmarkResult
    where
        F: Fn(&[i64]) -> Vec<i64>,
    {
        self.probe.quiesce();
        let initial_memory = self.probe.memory_mb();

        self.probe.start_timer();
        let sorted = sort(black_box(data));
        let elapsed = self.probe.stop_timer();

        let final_memory = self.probe.memory_mb();

        // Verification runs after the timer and snapshots
        if !sorted.is_sorted() {
            tracing::warn!("{} produced unsorted output", algorithm_name);
        }
        if sorted.len() != data.len() {
            tracing::warn!(
                "{} changed the sequence length from {} to {}",
                algorithm_name,
                data.len(),
                sorted.len()
            );
        }
        black_box(sorted);

        let result = BenchmarkResult::from_measurements(
            algorithm_name,
            data.len(),
            elapsed.as_secs_f64(),
            initial_memory,
            final_memory,
        );

        tracing::debug!(
            algorithm = %result.algorithm,
            data_size = result.data_size,
            execution_time = result.execution_time,
            memory_used_mb = result.memory_used_mb,
            "Measurement complete"
        );

        result
    }

    /// Access the underlying probe
    pub fn probe(&self) -> &I {
        &self.probe
    }
}
