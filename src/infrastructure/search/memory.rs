use crate::domain::entities::row::Row;
use crate::domain::value_objects::entity_name::EntityName;
use crate::infrastructure::search::dto::{FixtureFile, FixtureJob, JobRow};
use crate::infrastructure::search::job_store::{JobRepositoryError, JobStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A job kept entirely in memory, with every result set materialised.
#[derive(Debug, Clone)]
pub struct MemoryJob {
    pub row: JobRow,
    pub sets: HashMap<EntityName, Vec<Row>>,
}

impl MemoryJob {
    /// A finished job whose `results` set holds `rows`.
    pub fn with_results(sid: impl Into<String>, rows: Vec<Row>) -> Self {
        let mut sets = HashMap::new();
        let row = JobRow {
            sid: sid.into(),
            dispatch_state: "DONE".to_string(),
            is_done: true,
            result_count: rows.len() as u64,
            event_count: 0,
        };
        sets.insert(EntityName::Results, rows);
        Self { row, sets }
    }

    pub fn with_set(mut self, entity: EntityName, rows: Vec<Row>) -> Self {
        if entity == EntityName::Events {
            self.row.event_count = rows.len() as u64;
        }
        self.sets.insert(entity, rows);
        self
    }
}

impl From<FixtureJob> for MemoryJob {
    fn from(job: FixtureJob) -> Self {
        let is_done = job.dispatch_state.eq_ignore_ascii_case("DONE");
        let row = JobRow {
            sid: job.sid,
            dispatch_state: job.dispatch_state,
            is_done,
            result_count: job.results.len() as u64,
            event_count: job.events.len() as u64,
        };
        let sets = HashMap::from([
            (EntityName::Results, job.results),
            (EntityName::Events, job.events),
            (EntityName::ResultsPreview, job.results_preview),
        ]);
        Self { row, sets }
    }
}

/// Job store backed by a process-local map, for demos and tests.
#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<HashMap<String, MemoryJob>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every job described by a JSON fixture file.
    pub fn from_fixture_file(path: &Path) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_fixture_str(&raw)
    }

    pub fn from_fixture_str(raw: &str) -> Result<Self, FixtureError> {
        let fixture: FixtureFile = serde_json::from_str(raw)?;
        let store = Self::new();
        for job in fixture.jobs {
            store.insert(job.into());
        }
        Ok(store)
    }

    /// Insert or replace a job, keyed by its sid.
    pub fn insert(&self, job: MemoryJob) {
        let mut jobs = match self.jobs.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        jobs.insert(job.row.sid.clone(), job);
    }

    pub fn remove(&self, sid: &str) -> Option<MemoryJob> {
        let mut jobs = match self.jobs.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        jobs.remove(sid)
    }

    pub fn len(&self) -> usize {
        self.jobs.read().map(|jobs| jobs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn get(&self, sid: &str) -> Result<Option<JobRow>, JobRepositoryError> {
        let jobs = self
            .jobs
            .read()
            .map_err(|_| JobRepositoryError::StorageUnavailable)?;
        Ok(jobs.get(sid).map(|job| job.row.clone()))
    }

    async fn list_rows(
        &self,
        sid: &str,
        entity: EntityName,
        offset: usize,
        count: usize,
    ) -> Result<Vec<Row>, JobRepositoryError> {
        let jobs = self
            .jobs
            .read()
            .map_err(|_| JobRepositoryError::StorageUnavailable)?;
        let job = jobs.get(sid).ok_or(JobRepositoryError::NotFound)?;
        let rows = job
            .sets
            .get(&entity)
            .map(|rows| rows.iter().skip(offset).take(count).cloned().collect())
            .unwrap_or_default();
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), JobRepositoryError> {
        Ok(())
    }
}
