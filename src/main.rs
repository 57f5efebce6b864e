use ingress_keys::errors::Error;
use ingress_keys::logging::setup_tracing;
use ingress_keys::utils::get_version_string;
use ingress_keys::watch;
use kube::Client;
use std::env;
use tracing::info;

const WATCH_NAMESPACE_ENV: &str = "WATCH_NAMESPACE";

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();

    if args.contains(&String::from("--version")) {
        println!("{}", get_version_string());
        return Ok(());
    }

    // Keep the provider alive, dropping it stops trace export
    let _provider = setup_tracing()?;
    info!("Starting ingress key watcher {}", get_version_string());

    let namespace = env::var(WATCH_NAMESPACE_ENV)
        .ok()
        .filter(|namespace| !namespace.is_empty());
    let client = Client::try_default().await?;
    watch::run(client, namespace.as_deref()).await
}
