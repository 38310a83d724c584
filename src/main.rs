//! Xionco gateway - rate-limited HTTP front door for the furniture assistant

#![allow(missing_docs)]

use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xionco_gateway::server;

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine; the process environment still applies
    let dotenv = dotenvy::dotenv();

    init_tracing();

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(_) => info!("No .env file found, using process environment"),
    }

    // Start server (auto-loads config/gateway.yaml)
    match server::builder::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` selects levels (default `info`); `LOG_FORMAT=json` switches to JSON lines
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}
