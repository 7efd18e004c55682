// src/main.rs
use insights_backend::api::{create_app, AppState};
use insights_backend::config::AppConfig;
use insights_backend::logging::init_tracing;
use insights_backend::repository::ActivityStore;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    init_tracing();

    tracing::info!("Starting Teacher Insights backend...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded: {:?}", app_config);

    // データは起動時に一度だけ読み込む（失敗時は空のデータで起動を続ける）
    let store = Arc::new(ActivityStore::load(&app_config.data_path));
    if store.is_empty() {
        tracing::warn!("No activity records available, all endpoints will return empty results");
    }

    let server_addr = app_config.server_addr();
    let app_router = create_app(AppState::new(app_config, store));

    // サーバーの起動
    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
