use k8s_openapi::api::networking::v1::Ingress;

use crate::errors::Error;
use crate::utils::traits::kube::ExtendResource;

/// Source of the authoritative key for an ingress, normally the one the object store
/// indexes by. Implementations fail only when the object's identifying metadata is unusable.
pub trait KeyFunc {
    fn key(&self, ingress: &Ingress) -> Result<String, Error>;
}

impl<F> KeyFunc for F
where
    F: Fn(&Ingress) -> Result<String, Error>,
{
    fn key(&self, ingress: &Ingress) -> Result<String, Error> {
        self(ingress)
    }
}

/// `<namespace>/<name>`, or just `<name>` for objects without a namespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetaNamespaceKeyFunc;

impl KeyFunc for MetaNamespaceKeyFunc {
    fn key(&self, ingress: &Ingress) -> Result<String, Error> {
        if !ingress.has_name() {
            return Err(Error::InvalidMeta(format!(
                "ingress in namespace {:?} has no name",
                ingress.namespace_or_empty()
            )));
        }

        let namespace = ingress.namespace_or_empty();
        if namespace.is_empty() {
            Ok(ingress.name_or_empty().to_string())
        } else {
            Ok(format!("{}/{}", namespace, ingress.name_or_empty()))
        }
    }
}
