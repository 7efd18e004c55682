// src/domain/activity_model.rs

use crate::domain::activity_type::ActivityType;
use crate::types::{deserialize_id_from_string_or_number, ActivityTimestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 教師の操作1件分の記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(deserialize_with = "deserialize_id_from_string_or_number")]
    pub teacher_id: String,
    pub teacher_name: String,
    pub activity_type: String,
    pub subject: String,
    pub class: String,
    pub created_at: ActivityTimestamp,
    /// 上記以外のフィールドはそのまま保持して返す
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActivityRecord {
    /// 既知の種類であれば ActivityType を返す
    pub fn kind(&self) -> Option<ActivityType> {
        ActivityType::from_str(&self.activity_type)
    }

    pub fn is_by_teacher(&self, teacher_id: &str) -> bool {
        self.teacher_id == teacher_id
    }
}
