// src/api/dto/teacher_dto.rs

use crate::api::dto::analytics_dto::ActivityBreakdown;
use crate::domain::activity_model::ActivityRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSummaryDto {
    pub teacher_id: String,
    pub teacher_name: String,
    pub activity_count: usize,
    pub activity_breakdown: ActivityBreakdown,
}

/// 教師1人分の詳細分析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherAnalyticsDto {
    pub teacher_id: String,
    pub teacher_name: String,
    pub total_activities: usize,
    pub activity_breakdown: ActivityBreakdown,
    /// 週の開始日（日曜日, YYYY-MM-DD）ごとの生の記録
    pub weekly_breakdown: BTreeMap<String, Vec<ActivityRecord>>,
    pub subjects: Vec<String>,
    pub classes: Vec<String>,
}
