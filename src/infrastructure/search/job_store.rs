use crate::domain::entities::row::Row;
use crate::domain::value_objects::entity_name::EntityName;
use crate::infrastructure::search::dto::JobRow;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobRepositoryError {
    NotFound,
    Unauthorized,
    MalformedResponse,
    StorageUnavailable,
}

impl From<reqwest::Error> for JobRepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            JobRepositoryError::MalformedResponse
        } else {
            JobRepositoryError::StorageUnavailable
        }
    }
}

/// Access to search jobs held by the search platform.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Fetch a job by sid. Returns `None` if the platform does not know it.
    async fn get(&self, sid: &str) -> Result<Option<JobRow>, JobRepositoryError>;
    /// Rows `[offset, offset + count)` of the job's `entity` result set.
    ///
    /// Returns `NotFound` when the job disappeared; a short or empty slice is not an error.
    async fn list_rows(
        &self,
        sid: &str,
        entity: EntityName,
        offset: usize,
        count: usize,
    ) -> Result<Vec<Row>, JobRepositoryError>;
    /// Cheap reachability check used by the readiness probe.
    async fn ping(&self) -> Result<(), JobRepositoryError>;
}
