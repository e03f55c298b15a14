//! 健康检查

use axum::{extract::State, response::Json};

use super::AppState;
use crate::core::error::CoreError;

pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    let products = state.product_service.len()?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "store": {
            "type": "in-memory",
            "products": products
        }
    })))
}
