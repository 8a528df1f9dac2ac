//! File repositories
//!
//! Repositories handle all direct file system interactions.

pub mod results_repo;
pub mod test_data_repo;

pub use results_repo::ResultsRepository;
pub use test_data_repo::TestDataRepository;
