// src/api/dto/analytics_dto.rs

use crate::api::dto::teacher_dto::TeacherSummaryDto;
use crate::domain::activity_type::ActivityType;
use serde::{Deserialize, Serialize};

/// 既知の3種類ごとの件数。キーは常に lesson, quiz, assessment の3つ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityBreakdown {
    pub lesson: u64,
    pub quiz: u64,
    pub assessment: u64,
}

impl ActivityBreakdown {
    pub fn increment(&mut self, kind: ActivityType) {
        match kind {
            ActivityType::Lesson => self.lesson += 1,
            ActivityType::Quiz => self.quiz += 1,
            ActivityType::Assessment => self.assessment += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.lesson + self.quiz + self.assessment
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDto {
    pub total_activities: usize,
    pub total_teachers: usize,
    pub activity_breakdown: ActivityBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTrendDto {
    pub week: String,
    pub total_activities: usize,
    pub breakdown: ActivityBreakdown,
}

/// フロントエンドのダッシュボード画面が一度に取得するデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardDto {
    pub teachers: Vec<TeacherSummaryDto>,
    pub weekly_trends: Vec<WeeklyTrendDto>,
    pub summary: SummaryDto,
}
