// src/api/handlers/system_handler.rs

use crate::error::AppError;
use axum::{routing::get, Router};

pub const LIVENESS_MESSAGE: &str = "Teacher Insights Backend is running ✅";

/// 死活確認
pub async fn liveness_handler() -> &'static str {
    LIVENESS_MESSAGE
}

/// どのルートにも一致しないリクエスト
pub async fn endpoint_not_found() -> AppError {
    AppError::endpoint_not_found()
}

pub fn system_router() -> Router {
    Router::new().route("/", get(liveness_handler))
}
