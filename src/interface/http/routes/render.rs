// HTTP routes: heatmap module rendering.

use crate::application::localization::negotiate_locale;
use crate::application::usecases::generate_results::{
    GenerateResultsCommand, GenerateResultsError, GenerateResultsOutput, GenerateResultsUseCase,
};
use crate::infrastructure::search::job_store::JobRepositoryError;
use crate::interface::http::dto::render::RenderQuery;
use crate::interface::http::problem::{
    HM_ENTITY_NOT_FOUND, HM_INTERNAL, HM_PAGINATION_INVALID, HM_REQUEST_MALFORMED,
    HM_SEARCH_UNAVAILABLE, problem,
};
use crate::interface::http::state::AppState;
use crate::interface::http::trace::TraceId;
use axum::extract::{Extension, OriginalUri, Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use metrics::counter;
use tracing::error;

/// Builds the module render route.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/module/:host_app/heatmap/render", get(render))
}

/// Renders a search job's result rows for the heatmap view.
async fn render(
    State(state): State<AppState>,
    Path(host_app): Path<String>,
    Query(query): Query<RenderQuery>,
    OriginalUri(uri): OriginalUri,
    trace_id: Option<Extension<TraceId>>,
    headers: HeaderMap,
) -> Response {
    let trace_id = trace_id.map(|Extension(t)| t.0);

    // Step 1: Build the command from path, query and headers.
    let locale = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(negotiate_locale);
    let cmd = GenerateResultsCommand {
        host_app,
        client_app: query.client_app,
        sid: query.sid,
        count: query.count,
        offset: query.offset,
        entity_name: query.entity_name,
        locale,
    };

    // Step 2: Execute the use case.
    let result = GenerateResultsUseCase::execute(&state.ctx, cmd).await;

    // Step 3: Map output to HTTP response.
    let instance = Some(uri.path().to_string());
    match result {
        Ok(output) => {
            let outcome = match &output {
                GenerateResultsOutput::Rendered { .. } => "rendered",
                GenerateResultsOutput::JobMissing { .. } => "job_missing",
            };
            counter!("heatmap_render_total", "outcome" => outcome).increment(1);
            let body = output.into_body();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, body.content_type)],
                body.body,
            )
                .into_response()
        }
        Err(err) => {
            counter!("heatmap_render_total", "outcome" => "error").increment(1);
            error_response(err, instance, trace_id)
        }
    }
}

fn error_response(
    err: GenerateResultsError,
    instance: Option<String>,
    trace_id: Option<String>,
) -> Response {
    let detail = Some(err.to_string());
    match err {
        GenerateResultsError::InvalidArgument(_) => problem(
            StatusCode::BAD_REQUEST,
            HM_REQUEST_MALFORMED,
            detail,
            instance,
            trace_id,
        ),
        GenerateResultsError::TypeConversion(_) => problem(
            StatusCode::BAD_REQUEST,
            HM_PAGINATION_INVALID,
            detail,
            instance,
            trace_id,
        ),
        GenerateResultsError::AttributeNotFound(_) => problem(
            StatusCode::NOT_FOUND,
            HM_ENTITY_NOT_FOUND,
            detail,
            instance,
            trace_id,
        ),
        GenerateResultsError::Storage(cause) => {
            error!(error = ?cause, "search platform request failed");
            let status = match cause {
                JobRepositoryError::Unauthorized | JobRepositoryError::MalformedResponse => {
                    StatusCode::BAD_GATEWAY
                }
                _ => StatusCode::SERVICE_UNAVAILABLE,
            };
            problem(
                status,
                HM_SEARCH_UNAVAILABLE,
                Some("search platform unavailable".to_string()),
                instance,
                trace_id,
            )
        }
        GenerateResultsError::Serialization(e) => {
            error!(error = %e, "failed to serialize results");
            problem(
                StatusCode::INTERNAL_SERVER_ERROR,
                HM_INTERNAL,
                None,
                instance,
                trace_id,
            )
        }
    }
}
