// src/api/mod.rs
use crate::config::AppConfig;
use crate::logging::request_logging;
use crate::middleware::{cors_layer, handle_panic};
use crate::repository::activity_repository::ActivityStore;
use crate::service::analytics_service::AnalyticsService;
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub mod dto;
pub mod handlers;

use handlers::{activity_handler, analytics_handler, system_handler, teacher_handler};

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub analytics_service: Arc<AnalyticsService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<ActivityStore>) -> Self {
        Self {
            analytics_service: Arc::new(AnalyticsService::new(store)),
            config: Arc::new(config),
        }
    }
}

/// すべてのルーターとミドルウェアを組み合わせたアプリケーション
pub fn create_app(app_state: AppState) -> Router {
    let config = Arc::clone(&app_state.config);
    finalize_app(api_routes(app_state), &config)
}

/// API ルートのみ（フォールバックやミドルウェアは含まない）
pub fn api_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(system_handler::system_router())
        .merge(teacher_handler::teacher_router(app_state.clone()))
        .merge(analytics_handler::analytics_router(app_state.clone()))
        .merge(activity_handler::activity_router(app_state))
}

/// フォールバックとミドルウェアを適用する
///
/// 未定義のパスとメソッド違いはどちらも 404 `{"error": "Endpoint not found"}` を返す。
/// layer は登録済みのルートにのみ適用されるため、ルートの追加はこの前に行うこと。
pub fn finalize_app(routes: Router, config: &AppConfig) -> Router {
    routes
        .fallback(system_handler::endpoint_not_found)
        .method_not_allowed_fallback(system_handler::endpoint_not_found)
        .layer(middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(CatchPanicLayer::custom(handle_panic))
}
