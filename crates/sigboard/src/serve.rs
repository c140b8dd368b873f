use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;

use sigboard_sessions::SessionLoader;

use crate::api;

pub async fn handle_serve_command(loader: SessionLoader, limit: usize, port: u16) -> Result<()> {
    let base = loader.base().to_string();
    let router = api::create_router(Arc::new(loader), limit);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind API server to {}", addr))?;

    eprintln!();
    eprintln!(
        "  {} {}",
        "->".bright_green(),
        format!("Serving http://localhost:{}/api/stats", port).bold()
    );
    eprintln!("  {} Loading sessions from {}", "->".dimmed(), base);
    eprintln!("  {} Press {} to stop", "->".dimmed(), "Ctrl+C".bold());
    eprintln!();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server error")
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
