use crate::config::{Search, SearchBackend};
use crate::infrastructure::search::job_store::JobStore;
use crate::infrastructure::search::memory::{FixtureError, InMemoryJobStore};
use crate::infrastructure::search::splunk::{SplunkJobStore, SplunkStoreError};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreBuildError {
    #[error(transparent)]
    Splunk(#[from] SplunkStoreError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

/// Build the job store selected by `search.backend`.
pub fn build_job_store(settings: &Search) -> Result<Arc<dyn JobStore>, StoreBuildError> {
    match settings.backend {
        SearchBackend::Splunk => Ok(Arc::new(SplunkJobStore::new(settings)?)),
        SearchBackend::Memory => {
            let store = match settings.fixture_path.as_deref() {
                Some(path) => InMemoryJobStore::from_fixture_file(Path::new(path))?,
                None => InMemoryJobStore::new(),
            };
            Ok(Arc::new(store))
        }
    }
}
