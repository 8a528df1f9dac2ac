//! Benchmark service
//!
//! Drives a [`BenchmarkPlan`]: for each size, load the input once and measure
//! every algorithm against it, then persist all results in one write.

use crate::{
    benchmark::{
        instrumentation::Instrumentation,
        metrics::MetricsCollector,
        Algorithm, BenchmarkRunner,
    },
    config::StorageConfig,
    constants::DEFAULT_DATA_SIZES,
    error::BenchResult,
    models::BenchmarkResult,
    storage::{ResultsRepository, TestDataRepository},
};

/// The (size, algorithm) combinations to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkPlan {
    /// Data sizes, run in the given order
    pub sizes: Vec<usize>,
    /// Algorithms, run in the given order for every size
    pub algorithms: Vec<Algorithm>,
}

impl Default for BenchmarkPlan {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_DATA_SIZES.to_vec(),
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl BenchmarkPlan {
    /// Number of measurements a run makes when every input loads
    pub fn run_count(&self) -> usize {
        self.sizes.len() * self.algorithms.len()
    }
}

/// Orchestrates a full benchmark run
pub struct BenchmarkService<I> {
    plan: BenchmarkPlan,
    storage: StorageConfig,
    runner: BenchmarkRunner<I>,
}

impl<I: Instrumentation> BenchmarkService<I> {
    /// Create a new benchmark service
    pub fn new(plan: BenchmarkPlan, storage: StorageConfig, probe: I) -> Self {
        Self {
            plan,
            storage,
            runner: BenchmarkRunner::new(probe),
        }
    }

    /// Run every combination of the plan and collect the results
    ///
    /// A size whose input cannot be loaded is logged and skipped.
    pub async fn run_benchmarks(&mut self) -> MetricsCollector {
        let mut collector = MetricsCollector::new();

        tracing::info!(
            "Running {} algorithms over {} data sizes",
            self.plan.algorithms.len(),
            self.plan.sizes.len()
        );

        for &size in &self.plan.sizes {
            tracing::info!("Testing with array size: {}", size);

            let test_data = match TestDataRepository::load(&self.storage.data_dir, size).await {
                Ok(data) => data,
                Err(e) => {
                    tracing::error!("Error loading test data: {}", e);
                    continue;
                }
            };

            for algorithm in &self.plan.algorithms {
                tracing::info!("Running {}...", algorithm);

                let result = self
                    .runner
                    .measure(algorithm.function(), &test_data, algorithm.name());
                log_result(&result);

                collector.add_result(result);
            }
        }

        collector
    }

    /// Run the plan, log a summary and save the results
    ///
    /// Returns the saved results. Load failures only skip sizes; a failure to
    /// write the results file is returned.
    pub async fn run_and_save(&mut self) -> BenchResult<Vec<BenchmarkResult>> {
        let collector = self.run_benchmarks().await;

        if collector.result_count() < self.plan.run_count() {
            tracing::warn!(
                "Collected {} of {} planned results",
                collector.result_count(),
                self.plan.run_count()
            );
        }
        log_summary(&collector, &self.plan.algorithms);

        let results = collector.into_results();
        ResultsRepository::save(&self.storage.results_path, &results).await?;

        tracing::info!(
            "Saved {} results to {}",
            results.len(),
            self.storage.results_path.display()
        );

        Ok(results)
    }

    /// Access the runner's probe
    pub fn probe(&self) -> &I {
        self.runner.probe()
    }
}

fn log_result(result: &BenchmarkResult) {
    tracing::info!("  Execution time: {:.6} seconds", result.execution_time);
    tracing::info!("  Memory used: {:.2} MB", result.memory_used_mb);
    tracing::info!("  Initial memory: {:.2} MB", result.initial_memory_mb);
    tracing::info!("  Final memory: {:.2} MB", result.final_memory_mb);
}

fn log_summary(collector: &MetricsCollector, algorithms: &[Algorithm]) {
    for stats in algorithms.iter().filter_map(|&a| collector.algorithm_stats(a)) {
        tracing::info!(
            "{}: {} runs, total {:.6}s, slowest {:.6}s",
            stats.algorithm,
            stats.run_count,
            stats.total_time_seconds,
            stats.max_time_seconds
        );
    }

    let Some((&baseline, others)) = algorithms.split_first() else {
        return;
    };
    for &candidate in others {
        for cmp in collector.compare(baseline, candidate) {
            match (cmp.faster, cmp.time_ratio) {
                (None, _) => tracing::info!(
                    "Size {}: {} and {} tied",
                    cmp.data_size,
                    cmp.baseline,
                    cmp.candidate
                ),
                (Some(faster), Some(ratio)) => tracing::info!(
                    "Size {}: {} was faster ({} took {:.2}x the time of {})",
                    cmp.data_size,
                    faster,
                    cmp.candidate,
                    ratio,
                    cmp.baseline
                ),
                (Some(faster), None) => {
                    tracing::info!("Size {}: {} was faster", cmp.data_size, faster)
                }
            }
        }
    }
}
