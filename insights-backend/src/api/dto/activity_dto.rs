// src/api/dto/activity_dto.rs

use crate::domain::activity_model::ActivityRecord;
use crate::types::first_query_value;
use std::collections::BTreeMap;

/// GET /api/activities のクエリパラメータ（指定された条件はすべて AND）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilterDto {
    pub teacher_id: Option<String>,
    pub activity_type: Option<String>,
    pub subject: Option<String>,
}

impl ActivityFilterDto {
    /// 同じキーが複数回指定された場合は最初の値を使う
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            teacher_id: first_query_value(pairs, "teacher_id"),
            activity_type: first_query_value(pairs, "activity_type"),
            subject: first_query_value(pairs, "subject"),
        }
    }

    pub fn matches(&self, record: &ActivityRecord) -> bool {
        field_matches(self.teacher_id.as_deref(), &record.teacher_id)
            && field_matches(self.activity_type.as_deref(), &record.activity_type)
            && field_matches(self.subject.as_deref(), &record.subject)
    }

    pub fn is_empty(&self) -> bool {
        self.teacher_id.is_none() && self.activity_type.is_none() && self.subject.is_none()
    }
}

fn field_matches(expected: Option<&str>, actual: &str) -> bool {
    match expected {
        Some(expected) => expected == actual,
        None => true,
    }
}

/// activity_type ごとにまとめた生の記録
pub type ActivitiesByTypeDto = BTreeMap<String, Vec<ActivityRecord>>;
