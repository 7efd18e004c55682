// src/api/handlers/activity_handler.rs

use crate::api::dto::activity_dto::ActivitiesByTypeDto;
use crate::api::AppState;
use crate::domain::activity_model::ActivityRecord;
use crate::error::AppResult;
use crate::extractors::ActivityFilterQuery;
use axum::{extract::State, routing::get, Json, Router};

/// teacher_id / activity_type / subject で絞り込んだ生の記録
pub async fn list_activities_handler(
    State(app_state): State<AppState>,
    ActivityFilterQuery(filter): ActivityFilterQuery,
) -> AppResult<Json<Vec<ActivityRecord>>> {
    Ok(Json(app_state.analytics_service.filter_activities(&filter)))
}

pub async fn activities_by_type_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ActivitiesByTypeDto>> {
    Ok(Json(app_state.analytics_service.activities_by_type()))
}

pub fn activity_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/activities", get(list_activities_handler))
        .route("/api/activities/by-type", get(activities_by_type_handler))
        .with_state(app_state)
}
