#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use error::ServerError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = config::ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
