use crate::config::Observability;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` overrides `log_level`.
///
/// Returns an error if a subscriber is already installed.
pub fn init_tracing(
    settings: &Observability,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if settings.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

/// Install the Prometheus recorder when metrics are enabled.
pub fn init_metrics(settings: &Observability) -> Result<Option<PrometheusHandle>, BuildError> {
    if !settings.enable_metrics {
        return Ok(None);
    }
    let handle = PrometheusBuilder::new()
        .add_global_label("service", settings.service_name.clone())
        .install_recorder()?;
    Ok(Some(handle))
}
