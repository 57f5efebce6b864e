use std::sync::Arc;
use tracing::warn;

use crate::errors::Error;

/// Receives the diagnostics emitted when the primary key function fails and a fallback
/// key is used instead.
pub trait KeyLogger {
    fn key_lookup_failed(&self, namespace: &str, name: &str, error: &Error);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingKeyLogger;

impl KeyLogger for TracingKeyLogger {
    fn key_lookup_failed(&self, namespace: &str, name: &str, error: &Error) {
        warn!(
            namespace,
            ingress = name,
            %error,
            "Cannot get key for Ingress {namespace}/{name}: {error}, using namespaced name"
        );
    }
}

impl<L: KeyLogger + ?Sized> KeyLogger for Arc<L> {
    fn key_lookup_failed(&self, namespace: &str, name: &str, error: &Error) {
        (**self).key_lookup_failed(namespace, name, error)
    }
}
