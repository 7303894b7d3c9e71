use crate::domain::value_objects::ids::SearchId;

/// Read-only handle to a search job that exists on the search platform.
#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pub sid: SearchId,
    pub dispatch_state: DispatchState,
    pub is_done: bool,
    pub result_count: u64,
    pub event_count: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DispatchState {
    Queued,
    Parsing,
    Running,
    Finalizing,
    Done,
    Paused,
    Failed,
    Other(String),
}

impl DispatchState {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "QUEUED" => DispatchState::Queued,
            "PARSING" => DispatchState::Parsing,
            "RUNNING" => DispatchState::Running,
            "FINALIZING" => DispatchState::Finalizing,
            "DONE" => DispatchState::Done,
            "PAUSED" => DispatchState::Paused,
            "FAILED" => DispatchState::Failed,
            _ => DispatchState::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DispatchState::Queued => "QUEUED",
            DispatchState::Parsing => "PARSING",
            DispatchState::Running => "RUNNING",
            DispatchState::Finalizing => "FINALIZING",
            DispatchState::Done => "DONE",
            DispatchState::Paused => "PAUSED",
            DispatchState::Failed => "FAILED",
            DispatchState::Other(raw) => raw,
        }
    }
}
