//! MyCows SPA host.
//!
//! ```text
//!   Browser GET /animals/123
//!        │
//!        ▼
//!   ┌──────────┐   ┌────────────────┐   ┌────────────┐
//!   │   http   │──▶│    routing     │──▶│   pages    │
//!   │  server  │   │  RouteTable    │   │ View (HTML)│
//!   └──────────┘   └────────────────┘   └────────────┘
//!        ▲                 ▲
//!        │                 │ ArcSwap on reload
//!   lifecycle        config (TOML, watcher)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use mycows_web::config::{load_config, watcher::ConfigWatcher, SpaConfig};
use mycows_web::http::HttpServer;
use mycows_web::lifecycle::{signals, Shutdown};
use mycows_web::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "mycows-web")]
#[command(about = "Serves the MyCows single-page application", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reload the route table when the config file changes.
    #[arg(short, long, requires = "config")]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SpaConfig::default(),
    };

    logging::init_logging(&config.observability);
    tracing::info!("mycows-web v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // The watcher stops when dropped; keep it for the life of the server.
    let (_watcher, config_updates) = match (&args.config, args.watch) {
        (Some(path), true) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (Some(watcher.run()?), updates)
        }
        _ => (None, mpsc::unbounded_channel().1),
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    let server = HttpServer::new(config);
    server.run(listener, config_updates, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
