//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router serving every GET path through the route table
//! - Wire up middleware (tracing, timeout, request ID, security headers)
//! - Bind server to listener
//! - Swap in a new route table when a validated config arrives
//! - Stop on the shutdown broadcast, draining in-flight requests

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, Uri},
    response::Response,
    routing::get,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::validation::validate_routes;
use crate::config::{RouteConfig, SpaConfig, ValidationError};
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::http::response::{document_response, with_security_headers};
use crate::observability::metrics;
use crate::pages::View;
use crate::routing::{Location, RouteTable};

/// Error type for running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<ArcSwap<RouteTable>>,
}

/// HTTP server hosting the single-page application.
pub struct HttpServer {
    router: Router,
    config: SpaConfig,
    table: Arc<ArcSwap<RouteTable>>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SpaConfig) -> Self {
        let table = Arc::new(ArcSwap::from_pointee(RouteTable::from_config(&config.routes)));
        let state = AppState {
            table: table.clone(),
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            table,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SpaConfig, state: AppState) -> Router {
        let router = Router::new()
            .route("/", get(page_handler))
            .route("/{*path}", get(page_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request.headers()),
                )
            }))
            .layer(set_request_id_layer());

        if config.security.enable_headers {
            with_security_headers(router)
        } else {
            router
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<SpaConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.table.load().len(),
            "HTTP server starting"
        );

        let table = self.table.clone();
        let mut reload_shutdown = shutdown.resubscribe();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    update = config_updates.recv() => {
                        let Some(config) = update else { break };
                        let _ = apply_routes(&table, &config.routes);
                    }
                    _ = reload_shutdown.recv() => break,
                }
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared handle to the live route table.
    pub fn route_table(&self) -> Arc<ArcSwap<RouteTable>> {
        self.table.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SpaConfig {
        &self.config
    }
}

/// Validate `routes` and swap them in. The current table stays on error.
pub fn apply_routes(
    table: &ArcSwap<RouteTable>,
    routes: &[RouteConfig],
) -> Result<(), Vec<ValidationError>> {
    let errors = validate_routes(routes);
    if !errors.is_empty() {
        tracing::error!(errors = ?errors, "Rejected route table update");
        metrics::record_reload("rejected");
        return Err(errors);
    }

    table.store(Arc::new(RouteTable::from_config(routes)));
    metrics::record_reload("applied");
    tracing::info!(routes = routes.len(), "Route table reloaded");
    Ok(())
}

/// Resolve the request path and serve the page document.
async fn page_handler(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let start = Instant::now();
    let location = Location::parse(uri.path_and_query().map_or("/", |pq| pq.as_str()));

    let route_match = state.table.load().resolve(&location.pathname);
    let view = View::new(route_match.page, location);

    tracing::debug!(
        request_id = %request_id(&headers),
        path = %view.location.pathname,
        route = %route_match.route,
        page = view.page.as_str(),
        "Rendering page"
    );

    let response = document_response(&view);
    metrics::record_render(view.page, response.status().as_u16(), start);
    response
}
