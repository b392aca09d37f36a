use clap::Parser;
use grid_robot::{AppState, RobotEngine, ServerConfig, router};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::parse();
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .init();

    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "grid robot listening");
    axum::serve(listener, router(AppState::new(RobotEngine::new()))).await
}
