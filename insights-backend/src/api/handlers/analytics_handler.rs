// src/api/handlers/analytics_handler.rs

use crate::api::dto::analytics_dto::{DashboardDto, SummaryDto, WeeklyTrendDto};
use crate::api::AppState;
use crate::error::AppResult;
use axum::{extract::State, routing::get, Json, Router};

pub async fn get_summary_handler(State(app_state): State<AppState>) -> AppResult<Json<SummaryDto>> {
    Ok(Json(app_state.analytics_service.summary()))
}

/// 週ごとの推移（週の昇順）
pub async fn get_weekly_trends_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<WeeklyTrendDto>>> {
    Ok(Json(app_state.analytics_service.weekly_trends()))
}

pub async fn get_dashboard_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<DashboardDto>> {
    Ok(Json(app_state.analytics_service.dashboard()))
}

/// Analytics router
pub fn analytics_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/summary", get(get_summary_handler))
        .route("/api/weekly-trends", get(get_weekly_trends_handler))
        .route("/api/dashboard", get(get_dashboard_handler))
        .with_state(app_state)
}
