// src/service/analytics_service.rs

use crate::api::dto::activity_dto::{ActivitiesByTypeDto, ActivityFilterDto};
use crate::api::dto::analytics_dto::{DashboardDto, SummaryDto, WeeklyTrendDto};
use crate::api::dto::teacher_dto::{TeacherAnalyticsDto, TeacherSummaryDto};
use crate::domain::activity_model::ActivityRecord;
use crate::error::{AppError, AppResult};
use crate::repository::activity_repository::ActivityStore;
use crate::service::aggregation::{
    count_by_type, distinct_teacher_count, distinct_values, group_by_type, group_by_week,
    teacher_summaries, weekly_trends,
};
use std::sync::Arc;
use tracing::debug;

/// ストア全体（またはその一部）から各エンドポイントのレスポンスを組み立てる
pub struct AnalyticsService {
    store: Arc<ActivityStore>,
}

impl AnalyticsService {
    pub fn new(store: Arc<ActivityStore>) -> Self {
        Self { store }
    }

    pub fn list_teachers(&self) -> Vec<TeacherSummaryDto> {
        teacher_summaries(self.store.all())
    }

    pub fn summary(&self) -> SummaryDto {
        let records = self.store.all();
        SummaryDto {
            total_activities: records.len(),
            total_teachers: distinct_teacher_count(records),
            activity_breakdown: count_by_type(records),
        }
    }

    pub fn weekly_trends(&self) -> Vec<WeeklyTrendDto> {
        weekly_trends(self.store.all())
    }

    pub fn teacher_analytics(&self, teacher_id: &str) -> AppResult<TeacherAnalyticsDto> {
        let activities = self.store.find_by_teacher(teacher_id);
        let first = activities.first().ok_or_else(|| {
            debug!(teacher_id, "No activity records for teacher");
            AppError::teacher_not_found()
        })?;

        Ok(TeacherAnalyticsDto {
            teacher_id: first.teacher_id.clone(),
            teacher_name: first.teacher_name.clone(),
            total_activities: activities.len(),
            activity_breakdown: count_by_type(&activities),
            weekly_breakdown: group_by_week(&activities),
            subjects: distinct_values(&activities, |r| &r.subject),
            classes: distinct_values(&activities, |r| &r.class),
        })
    }

    pub fn filter_activities(&self, filter: &ActivityFilterDto) -> Vec<ActivityRecord> {
        if filter.is_empty() {
            return self.store.all().to_vec();
        }
        self.store.filter(filter)
    }

    pub fn activities_by_type(&self) -> ActivitiesByTypeDto {
        group_by_type(self.store.all())
    }

    pub fn dashboard(&self) -> DashboardDto {
        let records = self.store.all();
        let teachers = teacher_summaries(records);
        let summary = SummaryDto {
            total_activities: records.len(),
            total_teachers: teachers.len(),
            activity_breakdown: count_by_type(records),
        };

        DashboardDto {
            teachers,
            weekly_trends: weekly_trends(records),
            summary,
        }
    }
}
