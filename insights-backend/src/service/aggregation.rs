// src/service/aggregation.rs

//! 記録の列に対する純粋な集計関数。リクエストやレスポンスには依存しない。

use crate::api::dto::analytics_dto::{ActivityBreakdown, WeeklyTrendDto};
use crate::api::dto::teacher_dto::TeacherSummaryDto;
use crate::domain::activity_model::ActivityRecord;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap, HashSet};

/// 日付以前の直近の日曜日（その日が日曜日ならその日）
pub fn week_start_date(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// 記録が属する週のキー（YYYY-MM-DD）
pub fn week_key(record: &ActivityRecord) -> String {
    week_start_date(record.created_at.local_date())
        .format("%Y-%m-%d")
        .to_string()
}

/// 週の開始日ごとに記録をまとめる。キーは昇順、各週の中は入力順
pub fn group_by_week(records: &[ActivityRecord]) -> BTreeMap<String, Vec<ActivityRecord>> {
    let mut weeks: BTreeMap<String, Vec<ActivityRecord>> = BTreeMap::new();
    for record in records {
        weeks.entry(week_key(record)).or_default().push(record.clone());
    }
    weeks
}

/// 既知の種類ごとに件数を数える。未知の種類は無視する
pub fn count_by_type(records: &[ActivityRecord]) -> ActivityBreakdown {
    records
        .iter()
        .filter_map(ActivityRecord::kind)
        .fold(ActivityBreakdown::default(), |mut acc, kind| {
            acc.increment(kind);
            acc
        })
}

/// 指定したフィールドの重複しない値を、最初に現れた順で返す
pub fn distinct_values<F>(records: &[ActivityRecord], field: F) -> Vec<String>
where
    F: Fn(&ActivityRecord) -> &str,
{
    let mut seen = HashSet::new();
    records
        .iter()
        .map(field)
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

pub fn distinct_teacher_count(records: &[ActivityRecord]) -> usize {
    records
        .iter()
        .map(|r| r.teacher_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// 教師ごとの件数と内訳。教師が最初に現れた順に並ぶ
pub fn teacher_summaries(records: &[ActivityRecord]) -> Vec<TeacherSummaryDto> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<TeacherSummaryDto> = Vec::new();

    for record in records {
        let position = *index.entry(record.teacher_id.as_str()).or_insert_with(|| {
            summaries.push(TeacherSummaryDto {
                teacher_id: record.teacher_id.clone(),
                teacher_name: record.teacher_name.clone(),
                activity_count: 0,
                activity_breakdown: ActivityBreakdown::default(),
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[position];
        summary.activity_count += 1;
        if let Some(kind) = record.kind() {
            summary.activity_breakdown.increment(kind);
        }
    }

    summaries
}

/// 週ごとの件数推移（週の昇順）
pub fn weekly_trends(records: &[ActivityRecord]) -> Vec<WeeklyTrendDto> {
    group_by_week(records)
        .into_iter()
        .map(|(week, activities)| WeeklyTrendDto {
            week,
            total_activities: activities.len(),
            breakdown: count_by_type(&activities),
        })
        .collect()
}

/// activity_type の生の値ごとに記録をまとめる（未知の種類も含む）
pub fn group_by_type(records: &[ActivityRecord]) -> BTreeMap<String, Vec<ActivityRecord>> {
    let mut groups: BTreeMap<String, Vec<ActivityRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.activity_type.clone())
            .or_default()
            .push(record.clone());
    }
    groups
}
