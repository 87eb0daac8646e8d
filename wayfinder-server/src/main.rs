use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wayfinder_server::building::demo_building;
use wayfinder_server::config::ServerConfig;
use wayfinder_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wayfinder_server=info")),
        )
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let building = demo_building()?;
    info!(
        building = building.name(),
        nodes = building.nodes().len(),
        destinations = building.pois().len(),
        "Loaded building"
    );

    let state = AppState::new(building, &config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, timeout_ms = config.plan_timeout.as_millis() as u64, "Wayfinder listening");
    info!("  GET  /health         - Health check");
    info!("  GET  /destinations   - List destinations");
    info!("  POST /route/plan     - Plan a route");

    axum::serve(listener, app).await?;
    Ok(())
}
