//! Sentinel: privacy-hardening server for free-form text and documents.

use std::path::PathBuf;
use std::sync::Arc;

use sentinel_core::SentinelConfig;
use sentinel_infer::EntityCapability;
use sentinel_server::{build_router, scan, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Detect the entity-recognition capability off the async runtime.
async fn detect_capability(config: &SentinelConfig) -> anyhow::Result<EntityCapability> {
    let config = config.clone();
    let capability =
        tokio::task::spawn_blocking(move || sentinel_infer::detect_capability(&config)).await?;
    Ok(capability)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = SentinelConfig::from_env();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--scan" | "scan" => {
                if args.len() < 3 {
                    eprintln!("Usage: sentinel scan <file>");
                    std::process::exit(1);
                }
                let path = PathBuf::from(&args[2]);
                let capability = detect_capability(&config).await?;
                let preview_chars = config.preview_chars;
                let result = tokio::task::spawn_blocking(move || {
                    let state = AppState::new(config, capability);
                    scan::scan_file(&state.engine, &path, preview_chars)
                })
                .await?;
                match result {
                    Ok(report) => {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                        return Ok(());
                    }
                    Err(e) => {
                        eprintln!("Scan failed: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" | "help" => {
                println!("Sentinel: privacy hardening for text and documents");
                println!();
                println!("Usage: sentinel [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  scan <file>              Score and harden one document, print JSON");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'sentinel help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let capability = detect_capability(&config).await?;
    let addr = config.bind_addr();

    // Build application state
    let state = Arc::new(AppState::new(config, capability));

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Sentinel server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
