mod maze;
mod model;
mod server;

use crate::server::{
    config::Config,
    error::AppError,
    startup,
    state::{AppState, MazeLimits},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, MazeLimits::from_config(&config));

    let app = startup::build_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        "Starting server on {} (docs at /swagger-ui)",
        config.bind_address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
