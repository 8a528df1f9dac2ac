//! Results repository

use std::path::Path;

use crate::{
    error::{BenchError, BenchResult},
    models::BenchmarkResult,
};

/// Repository for the results file
pub struct ResultsRepository;

impl ResultsRepository {
    /// Write all results as a pretty-printed JSON array
    ///
    /// Missing parent directories are created. The file is written once, after
    /// encoding succeeds, so an encoding failure leaves no partial file.
    pub async fn save(path: &Path, results: &[BenchmarkResult]) -> BenchResult<()> {
        let mut json = serde_json::to_vec_pretty(results).map_err(BenchError::Encode)?;
        json.push(b'\n');

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| BenchError::io(parent, e))?;
        }

        tokio::fs::write(path, json)
            .await
            .map_err(|e| BenchError::io(path, e))?;

        tracing::debug!("Wrote {} results to {}", results.len(), path.display());
        Ok(())
    }

    /// Read a results file back
    pub async fn load(path: &Path) -> BenchResult<Vec<BenchmarkResult>> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| BenchError::io(path, e))?;

        serde_json::from_slice(&bytes).map_err(|source| BenchError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}
