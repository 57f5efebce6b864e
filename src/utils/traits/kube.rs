use kube::Resource;

/// Read-only accessors for the identifying metadata of any Kubernetes object.
///
/// Typed objects carry `namespace` and `name` as optional fields; a missing value is
/// reported as the empty string, which is how the rest of the crate treats it.
pub trait ExtendResource {
    fn namespace_or_empty(&self) -> &str;
    fn name_or_empty(&self) -> &str;
    fn has_name(&self) -> bool;
}

impl<T> ExtendResource for T
where
    T: Resource,
{
    fn namespace_or_empty(&self) -> &str {
        self.meta().namespace.as_deref().unwrap_or_default()
    }

    fn name_or_empty(&self) -> &str {
        self.meta().name.as_deref().unwrap_or_default()
    }

    fn has_name(&self) -> bool {
        !self.name_or_empty().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::networking::v1::Ingress;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    #[test]
    fn test_missing_metadata_reads_as_empty() {
        let ingress = Ingress::default();
        assert_eq!(ingress.namespace_or_empty(), "");
        assert_eq!(ingress.name_or_empty(), "");
        assert!(!ingress.has_name());
    }

    #[test]
    fn test_present_metadata() {
        let ingress = Ingress {
            metadata: ObjectMeta {
                namespace: Some("prod".into()),
                name: Some("web".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(ingress.namespace_or_empty(), "prod");
        assert_eq!(ingress.name_or_empty(), "web");
        assert!(ingress.has_name());
    }
}
