use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use metro_server::booking::{BookingIssuer, TokenSigner};
use metro_server::config::ServerConfig;
use metro_server::network::{MetroNetwork, NetworkDescription};
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load the network description (fail fast on bad data)
    let description = match &config.network_file {
        Some(path) => {
            info!(path = %path.display(), "loading network file");
            NetworkDescription::from_json_file(path).expect("Failed to read network file")
        }
        None => {
            warn!("no network file configured, using built-in seed");
            NetworkDescription::default_seed()
        }
    };
    let network = MetroNetwork::build(description).expect("Invalid network description");
    info!(
        stations = network.directory.len(),
        connections = network.graph.edge_count(),
        "network loaded"
    );

    let signer =
        TokenSigner::new(config.signing_secret.as_bytes()).expect("Invalid signing secret");
    let issuer = BookingIssuer::new(signer);

    let state = AppState::new(network, issuer, &config.route_cache);
    let app = create_router(state);

    let addr = config.bind_addr;
    info!("Metro planner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health            - Health check");
    info!("  GET  /stations          - Metro information sheet");
    info!("  GET  /stations/lookup   - Find a station by name");
    info!("  POST /routes            - Plan a route");
    info!("  POST /bookings          - Plan and book a route");
    info!("  POST /bookings/verify   - Verify a booking token");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
