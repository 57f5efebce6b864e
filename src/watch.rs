use futures::{StreamExt, TryStreamExt};
use k8s_openapi::api::networking::v1::Ingress;
use kube::runtime::watcher::{self, Event, watcher};
use kube::{Api, Client};
use tracing::{debug, info, instrument};

use crate::errors::Error;
use crate::keys::{KeyDeriver, KeyFunc, KeyLogger};

/// Keys of all ingresses carried by a watch event, in event order.
pub fn event_keys<F, L>(deriver: &KeyDeriver<F, L>, event: &Event<Ingress>) -> Vec<String>
where
    F: KeyFunc,
    L: KeyLogger,
{
    match event {
        Event::Applied(ingress) | Event::Deleted(ingress) => vec![deriver.derive_key(Some(ingress))],
        Event::Restarted(ingresses) => deriver.derive_keys_of(ingresses),
    }
}

/// Watch ingresses in `namespace`, or in all namespaces, and log their keys as they change.
#[instrument(skip(client))]
pub async fn run(client: Client, namespace: Option<&str>) -> Result<(), Error> {
    let api: Api<Ingress> = match namespace {
        Some(namespace) => Api::namespaced(client, namespace),
        None => Api::all(client),
    };
    let deriver: KeyDeriver = KeyDeriver::default();

    info!("ingress: Starting watcher");
    let mut stream = watcher(api, watcher::Config::default()).boxed();
    while let Some(event) = stream.try_next().await? {
        let keys = event_keys(&deriver, &event);
        match event {
            Event::Applied(_) => info!("ingress: applied {}", keys.join(", ")),
            Event::Deleted(_) => info!("ingress: deleted {}", keys.join(", ")),
            Event::Restarted(_) => {
                info!("ingress: restarted with {} objects", keys.len());
                debug!("ingress: current keys {:?}", keys);
            }
        }
    }

    Err(Error::UnexpectedExit("Ingress watch stream ended".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::MetaNamespaceKeyFunc;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn ingress(namespace: &str, name: &str) -> Ingress {
        Ingress {
            metadata: ObjectMeta {
                namespace: Some(namespace.into()),
                name: Some(name.into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_single_object_events() {
        let deriver = KeyDeriver::new(MetaNamespaceKeyFunc);
        let applied = Event::Applied(ingress("prod", "web"));
        let deleted = Event::Deleted(ingress("", "web"));

        assert_eq!(event_keys(&deriver, &applied), vec!["prod/web"]);
        assert_eq!(event_keys(&deriver, &deleted), vec!["web"]);
    }

    #[test]
    fn test_restarted_event_keeps_order() {
        let deriver = KeyDeriver::new(MetaNamespaceKeyFunc);
        let restarted = Event::Restarted(vec![
            ingress("b", "two"),
            ingress("a", "one"),
            ingress("", "three"),
        ]);

        assert_eq!(
            event_keys(&deriver, &restarted),
            vec!["b/two", "a/one", "three"]
        );
        assert!(event_keys(&deriver, &Event::Restarted(vec![])).is_empty());
    }
}
