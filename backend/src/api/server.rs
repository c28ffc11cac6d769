//! HTTP server for the cleaned document.
//!
//! The document is loaded once at start-up and never re-read.
//!
//! # API Endpoints
//!
//! | Method | Path        | Description                       |
//! |--------|-------------|-----------------------------------|
//! | GET    | `/`         | Client list page (name - email)   |
//! | GET    | `/api/data` | The document, verbatim            |
//! | GET    | `/health`   | Health check                      |

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tower_http::cors::CorsLayer;

use super::page::render_client_list;
use crate::error::{ServerError, ServerResult};
use crate::logs::{log_info, log_success};
use crate::models::CleanedData;

/// Shared, read-only server state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// File contents as loaded, served unchanged
    raw: Arc<String>,
    document: Arc<CleanedData>,
}

impl AppState {
    /// Load and check a cleaned document.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ServerError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, raw)
    }

    fn from_json(path: &Path, raw: String) -> ServerResult<Self> {
        let document: CleanedData =
            serde_json::from_str(&raw).map_err(|source| ServerError::InvalidData {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            raw: Arc::new(raw),
            document: Arc::new(document),
        })
    }

    pub fn document(&self) -> &CleanedData {
        &self.document
    }
}

/// Routes over a loaded document.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/", get(client_list))
        .route("/health", get(health))
        .route("/api/data", get(data))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(port: u16, data_path: &Path) -> ServerResult<()> {
    let state = AppState::load(data_path)?;
    log_success(format!(
        "Loaded {} ({} clients, {} products, {} services)",
        data_path.display(),
        state.document.clients.len(),
        state.document.products.len(),
        state.document.services.len()
    ));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    log_info(format!("🚀 Server running on http://localhost:{}", port));
    log_info("GET /         - Client list");
    log_info("GET /api/data - Cleaned document");
    log_info("GET /health   - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "datacleaner",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn data(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.raw.as_str().to_owned(),
    )
}

async fn client_list(State(state): State<AppState>) -> Response {
    match render_client_list(&state.document) {
        Ok(page) => Html(page).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("<h1>Error rendering clients: {}</h1>", e)),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use tempfile::tempdir;

    const DOCUMENT: &str = r#"{
  "clients": [
    { "id": "c1", "nom": "Jean dupont", "email": "a@b.com", "telephone": "514-555-1234", "codePostal": "H1A 1A1" }
  ],
  "produits": [],
  "services": []
}"#;

    #[tokio::test]
    async fn test_data_served_verbatim() {
        let state = AppState::from_json(Path::new("mem.json"), DOCUMENT.to_string()).unwrap();

        let response = data(State(state)).await.into_response();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, DOCUMENT.as_bytes());
    }

    #[tokio::test]
    async fn test_client_list_page() {
        let state = AppState::from_json(Path::new("mem.json"), DOCUMENT.to_string()).unwrap();

        let response = client_list(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("<li>Jean dupont - a@b.com</li>"));
    }

    #[test]
    fn test_load_rejects_other_shapes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"clients": "nope"}"#).unwrap();

        let err = AppState::load(&path).unwrap_err();
        assert!(matches!(err, ServerError::InvalidData { .. }));

        let err = AppState::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ServerError::Load { .. }));
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
    }
}
