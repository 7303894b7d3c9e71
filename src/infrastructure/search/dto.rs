use crate::domain::entities::job::{DispatchState, Job};
use crate::domain::entities::row::Row;
use crate::domain::value_objects::ids::SearchId;
use serde::Deserialize;

/// Job status as reported by the search platform (`content` of a job entry).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobRow {
    pub sid: String,
    #[serde(rename = "dispatchState", default = "default_dispatch_state")]
    pub dispatch_state: String,
    #[serde(rename = "isDone", default)]
    pub is_done: bool,
    #[serde(rename = "resultCount", default)]
    pub result_count: u64,
    #[serde(rename = "eventCount", default)]
    pub event_count: u64,
}

fn default_dispatch_state() -> String {
    "DONE".to_string()
}

impl JobRow {
    /// Convert a platform row into the domain handle.
    ///
    /// Returns `None` when the platform reports an empty sid.
    pub fn into_job(self) -> Option<Job> {
        let sid = SearchId::parse(Some(&self.sid)).ok()?;
        Some(Job {
            sid,
            dispatch_state: DispatchState::parse(&self.dispatch_state),
            is_done: self.is_done,
            result_count: self.result_count,
            event_count: self.event_count,
        })
    }
}

/// `GET /services/search/jobs/{sid}` envelope.
#[derive(Debug, Deserialize)]
pub struct JobEnvelope {
    #[serde(default)]
    pub entry: Vec<JobEntry>,
}

#[derive(Debug, Deserialize)]
pub struct JobEntry {
    pub content: JobRow,
}

/// `GET /services/search/jobs/{sid}/{results|events|results_preview}` body.
#[derive(Debug, Deserialize)]
pub struct RowsPage {
    #[serde(default)]
    pub results: Vec<Row>,
}

/// Seed file for the in-memory job store.
#[derive(Debug, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub jobs: Vec<FixtureJob>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureJob {
    pub sid: String,
    #[serde(default = "default_dispatch_state")]
    pub dispatch_state: String,
    #[serde(default)]
    pub results: Vec<Row>,
    #[serde(default)]
    pub events: Vec<Row>,
    #[serde(default)]
    pub results_preview: Vec<Row>,
}
