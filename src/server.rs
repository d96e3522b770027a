//! HTTP endpoint accepting print records.

use crate::config::AppConfig;
use crate::error::PrintError;
use crate::orchestrator::{DeviceLocks, PrintOrchestrator};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use rollprint_device::PrinterDriver;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request body must be JSON: {0}")]
    NotJson(String),

    #[error("Unknown printer profile '{0}'")]
    UnknownProfile(String),

    #[error(transparent)]
    Print(#[from] PrintError),

    #[error("Print job aborted: {0}")]
    Aborted(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            ApiError::NotJson(_) => (StatusCode::BAD_REQUEST, "malformed_input"),
            ApiError::UnknownProfile(_) => (StatusCode::NOT_FOUND, "unknown_profile"),
            ApiError::Print(e) => (
                StatusCode::from_u16(e.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                e.kind().as_str(),
            ),
            ApiError::Aborted(_) => (StatusCode::INTERNAL_SERVER_ERROR, "rendering_failure"),
        };
        (status, Json(json!({"error": self.to_string(), "kind": kind}))).into_response()
    }
}

/// The printers the service can reach, one orchestrator per profile.
#[derive(Clone)]
pub struct AppState {
    orchestrators: Arc<BTreeMap<String, Arc<PrintOrchestrator>>>,
    default_profile: String,
}

impl AppState {
    /// Builds one orchestrator per profile over `driver`; all of them share
    /// one lock registry.
    pub fn from_config(
        config: &AppConfig,
        driver: Arc<dyn PrinterDriver>,
    ) -> Result<Self, PrintError> {
        let locks = Arc::new(DeviceLocks::new());
        let mut orchestrators = BTreeMap::new();
        for (name, profile) in &config.profiles {
            let orchestrator = PrintOrchestrator::new(profile.clone(), driver.clone())?
                .with_locks(locks.clone());
            orchestrators.insert(name.clone(), Arc::new(orchestrator));
        }
        Ok(Self {
            orchestrators: Arc::new(orchestrators),
            default_profile: config.default_profile.clone(),
        })
    }

    fn orchestrator(&self, profile: &str) -> Result<Arc<PrintOrchestrator>, ApiError> {
        self.orchestrators
            .get(profile)
            .cloned()
            .ok_or_else(|| ApiError::UnknownProfile(profile.to_string()))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/print", post(print_default))
        .route("/printers/:profile/print", post(print_with_profile))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `config.bind` and serves until the process is stopped.
pub async fn serve(config: &AppConfig, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    log::info!("Print server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

async fn print_default(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state.default_profile.clone();
    print(state, &profile, body).await
}

async fn print_with_profile(
    State(state): State<AppState>,
    Path(profile): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    print(state, &profile, body).await
}

async fn print(state: AppState, profile: &str, body: Bytes) -> Result<Json<Value>, ApiError> {
    let orchestrator = state.orchestrator(profile)?;
    let value: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::NotJson(e.to_string()))?;

    let report = tokio::task::spawn_blocking(move || orchestrator.print_value(&value))
        .await
        .map_err(|e| ApiError::Aborted(e.to_string()))??;

    Ok(Json(json!({"status": "printed", "report": report})))
}
