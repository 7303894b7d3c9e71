use crate::application::localization::Localizer;
use crate::config::Settings;
use crate::infrastructure::search::JobRepository;

/// Shared application resources used by use cases.
pub struct AppContext {
    pub jobs: JobRepository,
    pub localizer: Localizer,
    pub settings: Settings,
}

impl AppContext {
    /// Build a new application context around a job repository.
    pub fn new(jobs: JobRepository, settings: Settings) -> Self {
        let localizer = Localizer::new(&settings.localization);
        Self {
            jobs,
            localizer,
            settings,
        }
    }
}
