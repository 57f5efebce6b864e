//! Stable string keys for ingress objects, for store lookups and log messages.
//!
//! Keys normally come from the injected [`KeyFunc`]. When it fails the key falls back to the
//! namespaced name `<namespace>/<name>`. The two agree except for objects without a namespace:
//! [`MetaNamespaceKeyFunc`] yields `<name>` while [`format_identity`] yields `/<name>`.
//! Callers comparing store keys with logged keys rely on that difference, so it is kept.

use k8s_openapi::api::networking::v1::Ingress;

use crate::utils::traits::kube::ExtendResource;

pub mod keyfunc;
pub mod logger;

pub use keyfunc::{KeyFunc, MetaNamespaceKeyFunc};
pub use logger::{KeyLogger, TracingKeyLogger};

/// Namespaced name of an ingress, as used in log messages. Empty for a missing ingress.
pub fn format_identity(ingress: Option<&Ingress>) -> String {
    match ingress {
        Some(ingress) => format!(
            "{}/{}",
            ingress.namespace_or_empty(),
            ingress.name_or_empty()
        ),
        None => String::new(),
    }
}

#[derive(Clone, Debug)]
pub struct KeyDeriver<F = MetaNamespaceKeyFunc, L = TracingKeyLogger> {
    key_fn: F,
    logger: L,
}

impl<F: KeyFunc> KeyDeriver<F, TracingKeyLogger> {
    pub fn new(key_fn: F) -> Self {
        Self::with_logger(key_fn, TracingKeyLogger)
    }
}

impl Default for KeyDeriver {
    fn default() -> Self {
        Self::new(MetaNamespaceKeyFunc)
    }
}

impl<F: KeyFunc, L: KeyLogger> KeyDeriver<F, L> {
    pub fn with_logger(key_fn: F, logger: L) -> Self {
        KeyDeriver { key_fn, logger }
    }

    /// Key of the ingress as generated by the key function, or its namespaced name if the
    /// key function fails. Never fails itself; a missing ingress yields an empty key.
    pub fn derive_key(&self, ingress: Option<&Ingress>) -> String {
        let Some(ingress) = ingress else {
            return String::new();
        };

        match self.key_fn.key(ingress) {
            Ok(key) => key,
            // Only objects with broken metadata end up here
            Err(error) => {
                self.logger.key_lookup_failed(
                    ingress.namespace_or_empty(),
                    ingress.name_or_empty(),
                    &error,
                );
                format_identity(Some(ingress))
            }
        }
    }

    pub fn derive_keys(&self, ingresses: &[Option<&Ingress>]) -> Vec<String> {
        let mut keys = Vec::with_capacity(ingresses.len());
        for ingress in ingresses {
            keys.push(self.derive_key(*ingress));
        }
        keys
    }

    pub fn derive_keys_of(&self, ingresses: &[Ingress]) -> Vec<String> {
        ingresses
            .iter()
            .map(|ingress| self.derive_key(Some(ingress)))
            .collect()
    }
}
