// src/api/handlers/teacher_handler.rs

use crate::api::dto::teacher_dto::{TeacherAnalyticsDto, TeacherSummaryDto};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::TeacherIdPath;
use axum::{extract::State, routing::get, Json, Router};

/// 教師一覧（最初に現れた順）
pub async fn list_teachers_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<TeacherSummaryDto>>> {
    Ok(Json(app_state.analytics_service.list_teachers()))
}

/// 教師1人分の分析。記録がなければ 404
pub async fn get_teacher_analytics_handler(
    State(app_state): State<AppState>,
    TeacherIdPath(teacher_id): TeacherIdPath,
) -> AppResult<Json<TeacherAnalyticsDto>> {
    let analytics = app_state
        .analytics_service
        .teacher_analytics(&teacher_id)?;
    Ok(Json(analytics))
}

pub fn teacher_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/teachers", get(list_teachers_handler))
        .route("/api/teachers/{teacher_id}", get(get_teacher_analytics_handler))
        .route("/api/teacher/{teacher_id}", get(get_teacher_analytics_handler))
        .with_state(app_state)
}
