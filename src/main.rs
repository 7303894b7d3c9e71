use heatmap_results::application::context::AppContext;
use heatmap_results::config;
use heatmap_results::infrastructure::search::{JobRepository, build_job_store};
use heatmap_results::interface::http;
use heatmap_results::interface::http::state::AppState;
use heatmap_results::observability;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    // Step 1: Load configuration.
    let settings = config::load().expect("load config");

    // Step 2: Install logging and metrics.
    observability::init_tracing(&settings.observability).expect("init tracing");
    let metrics = observability::init_metrics(&settings.observability).expect("init metrics");

    // Step 3: Connect the search platform job store.
    let store = build_job_store(&settings.search).expect("build job store");
    let jobs = JobRepository::new(store);

    // Step 4: Assemble shared application context and HTTP state.
    let ctx = AppContext::new(jobs, settings.clone());
    let state = AppState {
        ctx: Arc::new(ctx),
        metrics,
    };

    // Step 5: Build the HTTP app.
    let app = http::app(state);
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Step 6: Bind and serve.
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("bind server");
    info!(
        addr = %bind_addr,
        backend = ?settings.search.backend,
        service = %settings.observability.service_name,
        "listening"
    );

    axum::serve(listener, app).await.expect("serve");
}
