// src/middleware/panic.rs

use crate::error::AppError;
use axum::response::{IntoResponse, Response};
use std::any::Any;

/// ハンドラー内のパニックを 500 の汎用エラーレスポンスに変換する
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    AppError::InternalServerError(detail).into_response()
}
