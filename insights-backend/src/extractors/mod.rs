// src/extractors/mod.rs

use crate::api::dto::activity_dto::ActivityFilterDto;
use crate::error::AppError;
use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};

/// GET /api/activities の絞り込み条件
///
/// クエリ文字列を (キー, 値) の並びとして読むので、同じキーの重複や
/// 未知のキーで拒否されることはない。
#[derive(Debug, Clone, Default)]
pub struct ActivityFilterQuery(pub ActivityFilterDto);

impl<S> FromRequestParts<S> for ActivityFilterQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::BadRequest(format!("Invalid query string: {}", e.body_text()))
            })?;

        Ok(ActivityFilterQuery(ActivityFilterDto::from_query_pairs(&pairs)))
    }
}

/// パスパラメータの教師ID（不透明な文字列として扱う）
#[derive(Debug, Clone)]
pub struct TeacherIdPath(pub String);

impl<S> FromRequestParts<S> for TeacherIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(teacher_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::BadRequest(format!(
                    "Invalid path parameter 'teacher_id': {}",
                    e.body_text()
                ))
            })?;

        Ok(TeacherIdPath(teacher_id))
    }
}
