use crate::domain::entities::job::Job;
use crate::domain::entities::row::Row;
use crate::domain::value_objects::entity_name::EntityName;
use crate::domain::value_objects::ids::SearchId;
use crate::domain::value_objects::pagination::Page;
use crate::infrastructure::search::job_store::{JobRepositoryError, JobStore};
use std::sync::Arc;

pub struct JobRepository {
    store: Arc<dyn JobStore>,
}

impl JobRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    /// Resolve a sid to a job handle. Returns `None` if the platform doesn't know it.
    pub async fn get(&self, sid: &SearchId) -> Result<Option<Job>, JobRepositoryError> {
        let row = self.store.get(sid.as_str()).await?;
        match row {
            Some(row) => row
                .into_job()
                .map(Some)
                .ok_or(JobRepositoryError::MalformedResponse),
            None => Ok(None),
        }
    }

    /// Read the `page` window of the job's `entity` result set.
    pub async fn rows(
        &self,
        job: &Job,
        entity: EntityName,
        page: Page,
    ) -> Result<Vec<Row>, JobRepositoryError> {
        if page.is_empty() {
            return Ok(Vec::new());
        }
        self.store
            .list_rows(job.sid.as_str(), entity, page.offset, page.count)
            .await
    }

    /// Check that the backing store answers.
    pub async fn ping(&self) -> Result<(), JobRepositoryError> {
        self.store.ping().await
    }
}
