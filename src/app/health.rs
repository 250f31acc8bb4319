//! 健康检查

use axum::{extract::State, response::Json};

use super::AppState;
use crate::core::error::CoreError;

pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    let storage = state.product_service.ping().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "storage": storage,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
