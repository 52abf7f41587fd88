//! Workout Stopwatch - A state-managed HTTP stopwatch for timing workout sets
//!
//! This is the main entry point for the workout-stopwatch application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use workout_stopwatch::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::{display_printer_task, spawn_stopwatch_loop},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so the terminal display owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("workout_stopwatch={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let settings = config.stopwatch_settings()?;

    info!("Starting workout-stopwatch server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, refresh={}ms, sets template={:?}",
          config.host, config.port, config.refresh_ms, config.sets_template);

    // Start the stopwatch loop; it owns the controller
    let stopwatch = spawn_stopwatch_loop(settings);

    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        stopwatch.commands.clone(),
        stopwatch.display_rx.clone(),
    ));

    if config.show {
        let display_rx = state.subscribe_display();
        tokio::spawn(async move {
            display_printer_task(display_rx).await;
        });
    }

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle             - Start a set or pause");
    info!("  POST /reset              - Reset the time (while paused)");
    info!("  POST /sets/reset         - Reset the set count");
    info!("  GET  /snapshot           - Current snapshot");
    info!("  POST /restore            - Restore a snapshot");
    info!("  POST /lifecycle/stop     - Suspend ticking");
    info!("  POST /lifecycle/start    - Resume ticking");
    info!("  POST /lifecycle/recreate - Rebuild from snapshot");
    info!("  GET  /status             - Check current status");
    info!("  GET  /health             - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Drop the controller so no tick fires after shutdown
    state.shutdown();
    if let Err(e) = stopwatch.task.await {
        tracing::error!("Stopwatch loop ended abnormally: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
