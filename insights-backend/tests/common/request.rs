// tests/common/request.rs
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

pub fn get_request(uri: &str) -> Request<Body> {
    request_with_method(Method::GET, uri)
}

pub fn request_with_method(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// リクエストを送り、ステータスと本文の文字列を返す
pub async fn send_text(app: &Router, uri: &str) -> (StatusCode, String) {
    send_with_method(app, Method::GET, uri).await
}

/// 任意のメソッドでリクエストを送る
pub async fn send_with_method(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(request_with_method(method, uri))
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// リクエストを送り、ステータスと JSON 本文を返す
pub async fn send_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send_text(app, uri).await;
    let json = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("response for {} is not JSON ({}): {}", uri, e, body));
    (status, json)
}
