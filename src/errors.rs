#[derive(thiserror::Error, Debug)]
pub enum Error {
    // Kubernetes
    #[error("Kubernetes error {0}")]
    Kube(#[from] kube::Error),
    #[error("Resource watcher error {0}")]
    KubeWatcher(#[from] kube::runtime::watcher::Error),

    // Keys
    #[error("Object has invalid metadata: {0}")]
    InvalidMeta(String),

    // Tracing
    #[error("Failed to install tracing subscriber: {0}")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("Failed to set up OTLP exporter: {0}")]
    Otlp(#[from] opentelemetry::trace::TraceError),

    // Custom/generic
    #[error("Task ended unexpectedly: {0}")]
    UnexpectedExit(String),
}
