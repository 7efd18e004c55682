// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read activity data: {0}")]
    DataLoad(#[from] std::io::Error),

    #[error("Failed to parse activity data: {0}")]
    DataParse(#[from] serde_json::Error),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn teacher_not_found() -> Self {
        AppError::NotFound("Teacher not found".to_string())
    }

    pub fn endpoint_not_found() -> Self {
        AppError::NotFound("Endpoint not found".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DataLoad(_)
            | AppError::DataParse(_)
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::NotFound(message) | AppError::BadRequest(message) => {
                ErrorResponse { error: message }
            }
            other => {
                // サーバーログには詳細を出し、クライアントには汎用メッセージのみ返す
                tracing::error!(error = %other, "Request failed");
                ErrorResponse::internal()
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// エラーレスポンスの構造（フロントエンドは `error` フィールドのみを参照する）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn internal() -> Self {
        Self {
            error: "Internal server error".to_string(),
        }
    }
}
