//! Test data repository

use std::path::{Path, PathBuf};

use crate::{
    constants::TEST_DATA_FILE_PREFIX,
    error::{BenchError, BenchResult},
};

/// Repository for the externally generated input files
pub struct TestDataRepository;

impl TestDataRepository {
    /// Path of the input file for `size`
    pub fn path_for(data_dir: &Path, size: usize) -> PathBuf {
        data_dir.join(format!("{TEST_DATA_FILE_PREFIX}{size}.json"))
    }

    /// Load the input sequence for `size`
    ///
    /// The returned length is whatever the file holds; it is not checked
    /// against `size`.
    pub async fn load(data_dir: &Path, size: usize) -> BenchResult<Vec<i64>> {
        let path = Self::path_for(data_dir, size);

        let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BenchError::TestDataNotFound(path.clone()),
            _ => BenchError::io(&path, e),
        })?;

        let data: Vec<i64> = serde_json::from_slice(&bytes)
            .map_err(|source| BenchError::Decode { path: path.clone(), source })?;

        if data.len() != size {
            tracing::warn!(
                "{} holds {} values, expected {}",
                path.display(),
                data.len(),
                size
            );
        }

        Ok(data)
    }
}
