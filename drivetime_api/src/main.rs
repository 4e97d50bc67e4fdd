mod auth;
mod config;
mod drive_time;
mod error;
mod routes;
mod state;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use axum::serve;
use clap::Parser;
use mimalloc::MiMalloc;
use tracing::{Level, info};

use crate::{config::Config, routes::app, state::AppState};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_max_level(if config.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let state = Arc::new(AppState::from_config(&config)?);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Server running on {}", config.bind_address);

    serve(listener, app(state)).await?;

    Ok(())
}
