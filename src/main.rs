//! Countdown Label - host for the tap-to-start countdown widgets
//!
//! Owns a UI thread and the three widget flavours, and exposes them over
//! HTTP so taps can be delivered and labels read back.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_label::{
    config::Config,
    state::AppState,
    api::create_router,
    ui::{Dispatcher, Label, UiThread},
    widgets::{LabelTimer, ScreenTimer, TimerView},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_label={},tower_http=info", config.log_level()))
        .init();

    info!("Starting countdown-label v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, label={}s",
          config.host, config.port, config.label_seconds);

    // Configuration errors are fatal before anything is on screen
    let label_options = config.label_options();
    let view_attributes = config.view_attributes()?;

    // Every label write happens on this thread
    let ui = UiThread::spawn("ui")?;
    let dispatcher: Arc<dyn Dispatcher> = Arc::new(ui.dispatcher());

    let mut state = AppState::new(config.port, config.host.clone());

    let label = Label::new("screen");
    let screen = ScreenTimer::new("screen", label.clone(), Arc::clone(&dispatcher))?;
    state.add_widget(Box::new(screen), label);

    let label = Label::new("label");
    let wrapped = LabelTimer::new("label", &label_options, label.clone(), Arc::clone(&dispatcher))?;
    state.add_widget(Box::new(wrapped), label);

    let label = Label::new("view");
    let view = TimerView::new("view", &view_attributes, label.clone(), Arc::clone(&dispatcher))?;
    info!("Timer view: {}s, medium warning {}s, low warning {}s",
          view_attributes.start_time(), view.medium_warning(), view.low_warning());
    state.add_widget(Box::new(view), label);

    let state = Arc::new(state);

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    for name in state.widget_names() {
        info!("  POST /widgets/{}/tap - Tap the {} timer", name, name);
    }
    info!("  GET  /widgets/:name - Current label text and color");
    info!("  GET  /status        - Every widget and server info");
    info!("  GET  /health        - Health check");

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

    // The screen is going away: stop every countdown, then the UI thread
    state.shutdown_widgets();
    tokio::task::spawn_blocking(move || ui.shutdown()).await?;

    info!("Shutdown complete");
    Ok(())
}
