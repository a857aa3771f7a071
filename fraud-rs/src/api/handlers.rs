//! API request handlers

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{EngineHandle, PredictionResult};
use crate::error::FraudError;
use crate::heuristics::Category;
use crate::ingest;

/// Shared application state
pub struct AppState {
    pub engine: Arc<EngineHandle>,
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

/// Error half of a handler result: status code plus wrapped message
pub type ApiError<T> = (StatusCode, Json<ApiResponse<T>>);

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError<T>>;

fn reject<T>(status: StatusCode, msg: &str) -> ApiError<T> {
    (status, Json(ApiResponse::error(msg)))
}

/// Text prediction request body
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

/// One scored email
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub id: Uuid,
    pub scored_at: DateTime<Utc>,
    /// Name of the uploaded file, for file predictions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub result: PredictionResult,
}

impl PredictResponse {
    fn new(result: PredictionResult, file_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            scored_at: Utc::now(),
            file_name,
            result,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub features: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RulesResponse {
    pub boost: &'static [Category],
    pub reduce: &'static [Category],
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub features: usize,
}

// === API Handlers ===

/// Health check
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let engine = state.engine.current().await;

    Json(HealthResponse {
        status: "healthy",
        model_loaded: true,
        features: engine.dimension(),
        timestamp: Utc::now(),
    })
}

/// Score a raw email body
pub async fn predict_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PredictRequest>,
) -> ApiResult<PredictResponse> {
    let engine = state.engine.current().await;
    let response = PredictResponse::new(engine.predict(&req.text), None);

    info!(
        id = %response.id,
        label = %response.result.label,
        confidence = response.result.confidence,
        "Scored text"
    );

    Ok(Json(ApiResponse::success(response)))
}

/// Score an uploaded `.txt` or `.eml` file (multipart field `file`)
pub async fn predict_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<PredictResponse> {
    let mut upload = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Invalid multipart body");
                return Err(reject(e.status(), &format!("Invalid upload: {}", e)));
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| reject::<PredictResponse>(e.status(), &format!("Invalid upload: {}", e)))?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = match upload {
        Some(upload) => upload,
        None => return Err(reject(StatusCode::BAD_REQUEST, "Missing file field")),
    };

    let text = ingest::read_email_bytes(&file_name, &bytes).map_err(|e| {
        let status = match e {
            FraudError::UnsupportedFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            FraudError::MalformedEmail(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        reject::<PredictResponse>(status, &e.to_string())
    })?;

    let engine = state.engine.current().await;
    let response = PredictResponse::new(engine.predict(&text), Some(file_name));

    info!(
        id = %response.id,
        file = response.file_name.as_deref().unwrap_or_default(),
        label = %response.result.label,
        confidence = response.result.confidence,
        "Scored file"
    );

    Ok(Json(ApiResponse::success(response)))
}

/// Boost and reduce tables of the serving engine
pub async fn list_rules(State(state): State<Arc<AppState>>) -> ApiResult<RulesResponse> {
    let engine = state.engine.current().await;
    let rules = engine.adjuster().rules();

    Ok(Json(ApiResponse::success(RulesResponse {
        boost: rules.boost,
        reduce: rules.reduce,
    })))
}

/// Rebuild the engine from the configured artifacts
pub async fn reload_model(State(state): State<Arc<AppState>>) -> ApiResult<ReloadResponse> {
    match state.engine.reload().await {
        Ok(features) => Ok(Json(ApiResponse::success(ReloadResponse { features }))),
        Err(e) => Err(reject(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Failed to reload model: {}", e),
        )),
    }
}
