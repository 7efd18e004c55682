// tests/common/app_helper.rs

use axum::Router;
use insights_backend::{
    api::{create_app, AppState},
    config::AppConfig,
    repository::ActivityStore,
};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

use crate::common;

/// 指定した記録を持つアプリ状態
pub fn setup_state(records: Vec<Value>) -> AppState {
    common::init_test_env();
    let store = Arc::new(ActivityStore::from_values(records));
    AppState::new(AppConfig::for_testing(), store)
}

/// 指定した記録を持つアプリのセットアップ
pub fn setup_app(records: Vec<Value>) -> Router {
    create_app(setup_state(records))
}

/// データファイルから読み込むアプリのセットアップ
pub fn setup_app_from_file(path: &Path) -> Router {
    common::init_test_env();
    let mut config = AppConfig::for_testing();
    config.data_path = path.to_path_buf();
    let store = Arc::new(ActivityStore::load(&config.data_path));
    create_app(AppState::new(config, store))
}
