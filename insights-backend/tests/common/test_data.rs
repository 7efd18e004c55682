// tests/common/test_data.rs

use serde_json::{json, Value};

pub fn activity(
    teacher_id: Value,
    teacher_name: &str,
    activity_type: &str,
    subject: &str,
    class: &str,
    created_at: &str,
) -> Value {
    json!({
        "teacher_id": teacher_id,
        "teacher_name": teacher_name,
        "activity_type": activity_type,
        "subject": subject,
        "class": class,
        "created_at": created_at,
    })
}

/// 3人の教師の記録（ID "2" は数値として登録、未知の種類 workshop を含む）
pub fn sample_activities() -> Vec<Value> {
    vec![
        activity(json!(2), "Mr. Lee", "lesson", "English", "7B", "2024-01-04T10:00:00"),
        activity(json!("T1"), "Ms. Rao", "lesson", "Math", "8A", "2024-01-03"),
        activity(json!("T3"), "Dr. Kim", "quiz", "History", "9C", "2023-12-30"),
        activity(json!("T1"), "Ms. Rao", "quiz", "Math", "8B", "2024-01-10"),
        activity(json!(2), "Mr. Lee", "workshop", "English", "7B", "2024-01-12"),
        activity(json!("T1"), "Ms. Rao", "assessment", "Science", "8A", "2024-01-11T09:00:00"),
    ]
}

/// 同じ教師による2件の記録
pub fn two_record_scenario() -> Vec<Value> {
    vec![
        activity(json!("T1"), "Ms. Rao", "lesson", "Math", "8A", "2024-01-03"),
        activity(json!("T1"), "Ms. Rao", "quiz", "Math", "8A", "2024-01-10"),
    ]
}
