//! HTTP transport implementation.
//!
//! Serves the read-only JSON API, the frontend entry page and its static
//! assets. Resource failures are rendered as JSON envelopes with a status
//! code chosen by kind: 404 for absent resources, 500 for unreadable or
//! malformed files, 422 for payloads rejected by schema validation.

use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use http::StatusCode;
use serde_json::{Value, json};
use std::path::PathBuf;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::KnowledgeBaseServer;
use crate::domains::resources::ResourceError;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The request handler set.
    server: KnowledgeBaseServer,
    /// Where `index.html` lives.
    frontend_dir: PathBuf,
}

type ApiResult = Result<Json<Value>, ResourceError>;

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the application router.
    pub fn router(&self, server: KnowledgeBaseServer) -> Router {
        build_router(server, &self.config)
    }

    /// Run the HTTP transport until a shutdown signal arrives.
    pub async fn run(self, server: KnowledgeBaseServer) -> TransportResult<()> {
        let addr = self.address();
        info!("Starting transport: {}", self.config.description());

        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {}", addr);
        info!("  → API:      GET /api/{{data,appointments,information,staff,insurance,callflow}}");
        info!("  → Static:   GET /api/{{categories,updates,resources}}");
        info!("  → Frontend: GET / and /static/*");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the router serving the API and the frontend.
pub fn build_router(server: KnowledgeBaseServer, config: &HttpConfig) -> Router {
    let state = AppState {
        server,
        frontend_dir: config.frontend_dir.clone(),
    };

    let mut app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/api/data", get(get_all_data))
        .route("/api/appointments", get(get_appointments))
        .route("/api/information", get(get_information))
        .route("/api/staff", get(get_staff))
        .route("/api/insurance", get(get_insurance))
        .route("/api/callflow", get(get_callflow))
        .route("/api/categories", get(get_categories))
        .route("/api/updates", get(get_updates))
        .route("/api/resources", get(list_resources))
        .nest_service("/static", ServeDir::new(&config.frontend_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// HTTP status for a resource failure.
pub fn status_for(err: &ResourceError) -> StatusCode {
    match err {
        ResourceError::UnknownResource(_)
        | ResourceError::NotFound { .. }
        | ResourceError::NoDataFiles { .. } => StatusCode::NOT_FOUND,
        ResourceError::Parse { .. } | ResourceError::Io { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ResourceError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }
        (status, Json(self.envelope())).into_response()
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Cannot listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Root handler - serves the frontend entry page.
async fn root_handler(State(state): State<AppState>) -> Response {
    let index = state.frontend_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!("Frontend not found at {}: {}", index.display(), e);
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Frontend not found",
                    "details": e.to_string()
                })),
            )
                .into_response()
        }
    }
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "name": state.server.name(),
        "version": state.server.version(),
        "data_dirs": state
            .server
            .data_dirs()
            .iter()
            .map(|d| d.display().to_string())
            .collect::<Vec<_>>(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn get_all_data(State(state): State<AppState>) -> ApiResult {
    Ok(Json(state.server.get_all_data().await?))
}

async fn get_appointments(State(state): State<AppState>) -> ApiResult {
    Ok(Json(state.server.get_appointments().await?))
}

async fn get_information(State(state): State<AppState>) -> ApiResult {
    Ok(Json(state.server.get_information().await?))
}

async fn get_staff(State(state): State<AppState>) -> ApiResult {
    Ok(Json(state.server.get_staff().await?))
}

async fn get_insurance(State(state): State<AppState>) -> ApiResult {
    Ok(Json(state.server.get_insurance().await?))
}

async fn get_callflow(State(state): State<AppState>) -> ApiResult {
    Ok(Json(state.server.get_callflow().await?))
}

async fn get_categories(State(state): State<AppState>) -> Json<Value> {
    Json(state.server.get_categories())
}

async fn get_updates(State(state): State<AppState>) -> Json<Value> {
    Json(state.server.get_updates())
}

async fn list_resources(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "resources": state.server.list_resources() }))
}
