mod config;
mod routes;

use thiserror::Error;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "robonerve-site failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let app = routes::leptos_app()?;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "robonerve-site listening");
    axum::serve(listener, app).await?;
    Ok(())
}
