//! Metrics collection and run summary

use crate::constants::TIME_TIE_THRESHOLD_SECONDS;
use crate::models::BenchmarkResult;

use super::Algorithm;

/// Collects benchmark results in run order
#[derive(Debug, Default)]
pub struct MetricsCollector {
    results: Vec<BenchmarkResult>,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a benchmark result
    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Results collected so far, in run order
    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    /// Get number of results
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Consume the collector, returning the results in run order
    pub fn into_results(self) -> Vec<BenchmarkResult> {
        self.results
    }

    /// Time totals for `algorithm` across every size it ran at
    pub fn algorithm_stats(&self, algorithm: Algorithm) -> Option<AlgorithmStats> {
        let times: Vec<f64> = self
            .results_for(algorithm)
            .map(|r| r.execution_time)
            .collect();

        if times.is_empty() {
            return None;
        }

        Some(AlgorithmStats {
            algorithm,
            run_count: times.len(),
            total_time_seconds: times.iter().sum(),
            max_time_seconds: times.iter().cloned().fold(0.0, f64::max),
        })
    }

    /// Pair `baseline` and `candidate` at every size both ran at, in run order
    pub fn compare(&self, baseline: Algorithm, candidate: Algorithm) -> Vec<SizeComparison> {
        self.results_for(baseline)
            .filter_map(|base| {
                let other = self
                    .results_for(candidate)
                    .find(|r| r.data_size == base.data_size)?;
                Some(SizeComparison::new(
                    base.data_size,
                    (baseline, base.execution_time),
                    (candidate, other.execution_time),
                ))
            })
            .collect()
    }

    fn results_for(&self, algorithm: Algorithm) -> impl Iterator<Item = &BenchmarkResult> {
        self.results
            .iter()
            .filter(move |r| r.algorithm == algorithm.name())
    }
}

/// Time totals for one algorithm over a run
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmStats {
    pub algorithm: Algorithm,
    pub run_count: usize,
    pub total_time_seconds: f64,
    pub max_time_seconds: f64,
}

/// Two algorithms timed against the same input
#[derive(Debug, Clone, PartialEq)]
pub struct SizeComparison {
    pub data_size: usize,
    pub baseline: Algorithm,
    pub candidate: Algorithm,
    /// `candidate` time divided by `baseline` time; `None` when the baseline
    /// took no measurable time
    pub time_ratio: Option<f64>,
    /// `None` on a tie
    pub faster: Option<Algorithm>,
}

impl SizeComparison {
    fn new(data_size: usize, baseline: (Algorithm, f64), candidate: (Algorithm, f64)) -> Self {
        let (baseline, base_time) = baseline;
        let (candidate, cand_time) = candidate;

        let time_ratio = (base_time > 0.0).then(|| cand_time / base_time);
        let faster = if (base_time - cand_time).abs() < TIME_TIE_THRESHOLD_SECONDS {
            None
        } else if base_time < cand_time {
            Some(baseline)
        } else {
            Some(candidate)
        };

        Self {
            data_size,
            baseline,
            candidate,
            time_ratio,
            faster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(algorithm: Algorithm, size: usize, time: f64) -> BenchmarkResult {
        BenchmarkResult::from_measurements(algorithm.name(), size, time, 1.0, 1.0)
    }

    #[test]
    fn test_collector_keeps_run_order() {
        let mut collector = MetricsCollector::new();
        collector.add_result(result(Algorithm::Insertion, 10, 0.1));
        collector.add_result(result(Algorithm::Bubble, 10, 0.2));
        collector.add_result(result(Algorithm::Insertion, 20, 0.3));

        assert_eq!(collector.result_count(), 3);
        let names: Vec<&str> = collector.results().iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(names, ["Insertion Sort", "Bubble Sort", "Insertion Sort"]);
        assert_eq!(collector.into_results()[2].data_size, 20);
    }

    #[test]
    fn test_algorithm_stats() {
        let mut collector = MetricsCollector::new();
        collector.add_result(result(Algorithm::Insertion, 10, 0.1));
        collector.add_result(result(Algorithm::Bubble, 10, 0.4));
        collector.add_result(result(Algorithm::Insertion, 20, 0.3));

        let stats = collector.algorithm_stats(Algorithm::Insertion).unwrap();
        assert_eq!(stats.run_count, 2);
        assert!((stats.total_time_seconds - 0.4).abs() < 1e-9);
        assert!((stats.max_time_seconds - 0.3).abs() < 1e-9);

        assert!(MetricsCollector::new().algorithm_stats(Algorithm::Bubble).is_none());
    }

    #[test]
    fn test_compare_pairs_by_algorithm_not_position() {
        let mut collector = MetricsCollector::new();
        // Bubble ran first at size 10; pairing must still follow names
        collector.add_result(result(Algorithm::Bubble, 10, 0.3));
        collector.add_result(result(Algorithm::Insertion, 10, 0.1));
        collector.add_result(result(Algorithm::Insertion, 20, 0.2));

        let comparisons = collector.compare(Algorithm::Insertion, Algorithm::Bubble);
        assert_eq!(comparisons.len(), 1);

        let cmp = &comparisons[0];
        assert_eq!(cmp.data_size, 10);
        assert_eq!(cmp.baseline, Algorithm::Insertion);
        assert!((cmp.time_ratio.unwrap() - 3.0).abs() < 1e-9);
        assert_eq!(cmp.faster, Some(Algorithm::Insertion));
    }

    #[test]
    fn test_compare_tie_and_zero_baseline() {
        let mut collector = MetricsCollector::new();
        collector.add_result(result(Algorithm::Insertion, 5, 0.0));
        collector.add_result(result(Algorithm::Bubble, 5, 0.0));

        let cmp = &collector.compare(Algorithm::Insertion, Algorithm::Bubble)[0];
        assert_eq!(cmp.faster, None);
        assert_eq!(cmp.time_ratio, None);
    }
}
