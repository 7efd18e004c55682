// tests/analytics_api_tests.rs
use axum::http::StatusCode;
use serde_json::json;

mod common;

use common::app_helper::setup_app;
use common::request::{send_json, send_text};
use common::test_data::{sample_activities, two_record_scenario};

#[tokio::test]
async fn test_summary_for_two_records() {
    let app = setup_app(two_record_scenario());

    let (status, body) = send_text(&app, "/api/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"total_activities":2,"total_teachers":1,"activity_breakdown":{"lesson":1,"quiz":1,"assessment":0}}"#
    );
}

#[tokio::test]
async fn test_summary_excludes_unknown_kinds_from_breakdown() {
    let app = setup_app(sample_activities());

    let (status, json) = send_json(&app, "/api/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_activities"], 6);
    assert_eq!(json["total_teachers"], 3);
    assert_eq!(
        json["activity_breakdown"],
        json!({ "lesson": 2, "quiz": 2, "assessment": 1 })
    );
}

#[tokio::test]
async fn test_weekly_trends_sorted_ascending() {
    let app = setup_app(sample_activities());

    let (status, json) = send_json(&app, "/api/weekly-trends").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            {
                "week": "2023-12-24",
                "total_activities": 1,
                "breakdown": { "lesson": 0, "quiz": 1, "assessment": 0 }
            },
            {
                "week": "2023-12-31",
                "total_activities": 2,
                "breakdown": { "lesson": 2, "quiz": 0, "assessment": 0 }
            },
            {
                "week": "2024-01-07",
                "total_activities": 3,
                "breakdown": { "lesson": 0, "quiz": 1, "assessment": 1 }
            }
        ])
    );
}

#[tokio::test]
async fn test_weekly_trends_independent_of_input_order() {
    let mut reversed = sample_activities();
    reversed.reverse();

    let (_, forward) = send_json(&setup_app(sample_activities()), "/api/weekly-trends").await;
    let (_, backward) = send_json(&setup_app(reversed), "/api/weekly-trends").await;

    assert_eq!(forward, backward);
    let weeks: Vec<&str> = forward
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["week"].as_str().unwrap())
        .collect();
    let mut sorted = weeks.clone();
    sorted.sort();
    assert_eq!(weeks, sorted);
}

#[tokio::test]
async fn test_dashboard_combines_views() {
    let app = setup_app(sample_activities());

    let (status, dashboard) = send_json(&app, "/api/dashboard").await;
    let (_, teachers) = send_json(&app, "/api/teachers").await;
    let (_, trends) = send_json(&app, "/api/weekly-trends").await;
    let (_, summary) = send_json(&app, "/api/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["teachers"], teachers);
    assert_eq!(dashboard["weekly_trends"], trends);
    assert_eq!(dashboard["summary"], summary);
}

#[tokio::test]
async fn test_empty_dataset_serves_empty_results() {
    let app = setup_app(vec![]);

    let (status, summary) = send_json(&app, "/api/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        summary,
        json!({
            "total_activities": 0,
            "total_teachers": 0,
            "activity_breakdown": { "lesson": 0, "quiz": 0, "assessment": 0 }
        })
    );

    let (_, trends) = send_json(&app, "/api/weekly-trends").await;
    assert_eq!(trends, json!([]));

    let (_, dashboard) = send_json(&app, "/api/dashboard").await;
    assert_eq!(dashboard["teachers"], json!([]));
    assert_eq!(dashboard["weekly_trends"], json!([]));
}
