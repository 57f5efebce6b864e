use crate::errors::Error;
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{Tracer, TracerProvider};
use opentelemetry_sdk::{Resource, trace};
use std::env;
use tracing::info;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry};

pub const SERVICE_NAME: &str = "ingress-key-watcher";
pub const OTLP_ENDPOINT_ENV: &str = "OTLP_ENDPOINT";

type OtlpLayer = OpenTelemetryLayer<Registry, Tracer>;

/// Log filter from `RUST_LOG`-style directives. Without directives everything at INFO
/// and above is kept, so key fallbacks and watch events are visible by default.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn otlp_resource() -> Resource {
    Resource::new([KeyValue::new("service.name", SERVICE_NAME)])
}

/// Exporter layer for the OTLP/HTTP endpoint. Traces are only exported while the returned
/// provider is alive.
fn otlp_layer(endpoint: &str) -> Result<(TracerProvider, OtlpLayer), Error> {
    let exporter = opentelemetry_otlp::new_exporter()
        .http()
        .with_endpoint(endpoint)
        .build_span_exporter()?;

    let provider = TracerProvider::builder()
        .with_config(trace::config().with_resource(otlp_resource()))
        .with_simple_exporter(exporter)
        .build();
    let layer = tracing_opentelemetry::layer().with_tracer(provider.tracer(SERVICE_NAME));

    Ok((provider, layer))
}

/// Install the global subscriber: a compact console layer, plus an OTLP layer when
/// `OTLP_ENDPOINT` is set. Both are filtered by `RUST_LOG`.
pub fn setup_tracing() -> Result<Option<TracerProvider>, Error> {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    let otlp_endpoint = env::var(OTLP_ENDPOINT_ENV).ok();

    let (provider, exporter_layer) = match otlp_endpoint.as_deref() {
        Some(endpoint) => {
            let (provider, layer) = otlp_layer(endpoint)?;
            (Some(provider), Some(layer.with_filter(env_filter(directives.as_deref()))))
        }
        None => (None, None),
    };
    let console_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_filter(env_filter(directives.as_deref()));

    tracing::subscriber::set_global_default(
        Registry::default().with(exporter_layer).with(console_layer),
    )?;

    if let Some(endpoint) = otlp_endpoint {
        info!("Exporting traces to {endpoint}");
    }
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::{Key, Value};

    #[test]
    fn test_filter_defaults_to_info() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(env_filter(Some("")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_filter_uses_directives() {
        assert_eq!(env_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(Some("error")).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_otlp_resource_names_service() {
        assert_eq!(
            otlp_resource().get(Key::new("service.name")),
            Some(Value::from(SERVICE_NAME))
        );
    }
}
