// src/logging/mod.rs

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Instrument;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// RUST_LOG が未設定の場合のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "insights_backend=info,tower_http=info";

/// レスポンスに付与するリクエストID
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// どのルートにも一致しなかったリクエストのルート名
pub const UNMATCHED_ROUTE: &str = "<unmatched>";

/// トレーシングの設定
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(fmt::layer())
        .init();
}

/// ルーティング後のテンプレート（`/api/teacher/{teacher_id}` など）を返す
///
/// `Router::layer` で適用した場合のみ `MatchedPath` が入っている。
pub fn route_of(req: &Request<Body>) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map_or_else(|| UNMATCHED_ROUTE.to_string(), |path| path.as_str().to_string())
}

/// リクエストごとのスパンと完了ログ
///
/// スパンにはリクエストID・メソッド・一致したルートを記録し、
/// 完了時はステータスに応じて ERROR / WARN / INFO で出力する。
pub async fn request_logging(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let route = route_of(&req);
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        route = %route,
    );

    span.in_scope(|| tracing::debug!(path = %req.uri().path(), "Request started"));

    let mut response = next.run(req).instrument(span.clone()).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis();

    span.in_scope(|| log_completion(status, duration_ms));

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

fn log_completion(status: StatusCode, duration_ms: u128) {
    let code = status.as_u16();
    if status.is_server_error() {
        tracing::error!(status = code, duration_ms, "Request completed");
    } else if status.is_client_error() {
        tracing::warn!(status = code, duration_ms, "Request completed");
    } else {
        tracing::info!(status = code, duration_ms, "Request completed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_of_without_match() {
        let req = Request::builder()
            .uri("/api/unknown")
            .body(Body::empty())
            .unwrap();
        assert_eq!(route_of(&req), UNMATCHED_ROUTE);
    }
}
