use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::UserStore;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve the bind address from `config.toml` and the environment
/// (`SERVER_HOST`, `PORT`); the port defaults to 3000.
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let cfg = configs::AppConfig::load_and_validate()?;
    Ok(cfg.server.bind_addr().parse()?)
}

/// Public entry: build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let addr = load_bind_addr()?;

    // State resets to the seed records on every process start; there is
    // deliberately no persistence.
    let state = ServerState::new(UserStore::with_seed(), addr.port());
    let app: Router = routes::build_router(state, build_cors());

    info!(%addr, "starting user api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("received Ctrl+C, shutting down");
}
