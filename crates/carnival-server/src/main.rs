//! HTTP API server for the carnival planner.
//!
//! Serves the planner document over REST: events, map blocks, and bulk
//! read/replace of the whole store. State lives in one JSON file on disk.

mod error;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use carnival_core::Store;
use state::AppState;

#[derive(Parser)]
#[command(name = "carnival-server", about = "HTTP API for the carnival planner")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8001)]
    port: u16,

    /// Path to the JSON data file.
    #[arg(long, default_value = "data.json")]
    data_file: PathBuf,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let state = AppState::shared(Store::new(&args.data_file));
    let app = routes::router(state);

    let addr: SocketAddr = match format!("{}:{}", args.host, args.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("invalid address {}:{}: {}", args.host, args.port, e);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    log::info!(
        "carnival planner API listening on http://{} (data file: {})",
        addr,
        args.data_file.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .ok();
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    log::info!("shutting down");
}
