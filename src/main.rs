use lead_gateway::servers::signals::global_shutdown_signal;
use lead_gateway::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, gateway) = bootstrap::app::setup();

    let jobs = app::start(&config, gateway).await;

    // handle the signals
    global_shutdown_signal().await;

    info!("Lead gateway shutting down ...");

    // Await for all jobs to shutdown
    futures::future::join_all(jobs).await;

    info!("Lead gateway successfully shutdown.");
}
