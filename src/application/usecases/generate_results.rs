// Use case: generate_results.

use crate::application::context::AppContext;
use crate::application::localization::SEARCH_DATA_UNAVAILABLE;
use crate::application::shared::json_render::{Payload, RenderedBody, render_json};
use crate::domain::services::projection::parse_dataset;
use crate::domain::value_objects::entity_name::{EntityName, UnknownEntity};
use crate::domain::value_objects::ids::{MissingSearchId, SearchId};
use crate::domain::value_objects::pagination::{Page, PaginationError};
use crate::infrastructure::search::job_store::JobRepositoryError;
use metrics::counter;
use thiserror::Error;
use tracing::{debug, error};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Renders a slice of a search job's result set as heatmap records.
pub struct GenerateResultsUseCase;

/// Raw request values; nothing is validated until `execute`.
#[derive(Debug, Clone, Default)]
pub struct GenerateResultsCommand {
    pub host_app: String,
    pub client_app: Option<String>,
    pub sid: Option<String>,
    pub count: Option<String>,
    pub offset: Option<String>,
    pub entity_name: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Error)]
pub enum GenerateResultsError {
    #[error(transparent)]
    InvalidArgument(#[from] MissingSearchId),

    #[error(transparent)]
    TypeConversion(#[from] PaginationError),

    #[error(transparent)]
    AttributeNotFound(#[from] UnknownEntity),

    #[error("search platform error: {0:?}")]
    Storage(JobRepositoryError),

    #[error("serialize results: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateResultsOutput {
    /// Padded JSON list of output records.
    Rendered { body: RenderedBody, rows: usize },
    /// The job could not be found; body is the localized HTML status fragment.
    JobMissing { body: RenderedBody },
}

impl GenerateResultsOutput {
    pub fn body(&self) -> &RenderedBody {
        match self {
            GenerateResultsOutput::Rendered { body, .. } => body,
            GenerateResultsOutput::JobMissing { body } => body,
        }
    }

    pub fn into_body(self) -> RenderedBody {
        match self {
            GenerateResultsOutput::Rendered { body, .. } => body,
            GenerateResultsOutput::JobMissing { body } => body,
        }
    }
}

impl GenerateResultsUseCase {
    /// Fetch `[offset, offset + count)` of the job's result set and render it.
    pub async fn execute(
        ctx: &AppContext,
        cmd: GenerateResultsCommand,
    ) -> Result<GenerateResultsOutput, GenerateResultsError> {
        // Step 1: Normalize pagination.
        let page = Page::from_raw(
            cmd.count.as_deref(),
            cmd.offset.as_deref(),
            ctx.settings.results.default_count,
        )?;

        // Step 2: Require a sid before touching the search platform.
        let sid = SearchId::parse(cmd.sid.as_deref())?;

        // Step 3: Resolve the job; a missing job becomes the status fragment.
        let job = match ctx.jobs.get(&sid).await {
            Ok(Some(job)) => job,
            Ok(None) | Err(JobRepositoryError::NotFound) => {
                return Ok(Self::job_missing(ctx, &sid, cmd.locale.as_deref()));
            }
            Err(err) => return Err(GenerateResultsError::Storage(err)),
        };

        // Step 4: Resolve the requested result set.
        let entity = cmd
            .entity_name
            .as_deref()
            .unwrap_or(&ctx.settings.results.default_entity)
            .parse::<EntityName>()?;

        // Step 5: Read the window; the job may have expired since the lookup.
        let rows = match ctx.jobs.rows(&job, entity, page).await {
            Ok(rows) => rows,
            Err(JobRepositoryError::NotFound) => {
                return Ok(Self::job_missing(ctx, &sid, cmd.locale.as_deref()));
            }
            Err(err) => return Err(GenerateResultsError::Storage(err)),
        };

        // Step 6: Project and render.
        let records = parse_dataset(&rows);
        let body = render_json(&Payload::Raw(&records), &ctx.settings.results.mime_type)?;
        debug!(
            sid = %sid,
            host_app = %cmd.host_app,
            client_app = cmd.client_app.as_deref().unwrap_or(""),
            entity = %entity,
            output = body.payload(),
            "rendered results"
        );
        counter!("heatmap_rows_rendered_total").increment(records.len() as u64);

        Ok(GenerateResultsOutput::Rendered {
            body,
            rows: records.len(),
        })
    }

    fn job_missing(ctx: &AppContext, sid: &SearchId, locale: Option<&str>) -> GenerateResultsOutput {
        error!(sid = %sid, "could not find search job");
        GenerateResultsOutput::JobMissing {
            body: RenderedBody {
                content_type: HTML_CONTENT_TYPE.to_string(),
                body: ctx.localizer.translate(locale, &SEARCH_DATA_UNAVAILABLE),
            },
        }
    }
}
