// src/repository/activity_repository.rs

use crate::api::dto::activity_dto::ActivityFilterDto;
use crate::domain::activity_model::ActivityRecord;
use crate::error::AppResult;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// 起動時に一度だけ読み込まれる、読み取り専用のアクティビティ記録
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    records: Vec<ActivityRecord>,
}

impl ActivityStore {
    pub fn from_records(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }

    /// ファイルから読み込む。読み込みに失敗した場合は空のストアを返し、サーバーは起動を続ける
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => {
                info!(
                    path = %path.display(),
                    records = store.len(),
                    "Loaded activity records"
                );
                store
            }
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "Error loading activity data, serving an empty dataset"
                );
                Self::default()
            }
        }
    }

    pub fn try_load(path: impl AsRef<Path>) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let values: Vec<Value> = serde_json::from_str(&content)?;
        Ok(Self::from_values(values))
    }

    /// 配列の要素ごとにパースし、不正な要素は警告を出してスキップする
    pub fn from_values(values: Vec<Value>) -> Self {
        let total = values.len();
        let records: Vec<ActivityRecord> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed activity record");
                    None
                }
            })
            .collect();

        let skipped = total - records.len();
        if skipped > 0 {
            warn!(skipped, loaded = records.len(), "Some activity records were skipped");
        }

        Self { records }
    }

    pub fn all(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_teacher(&self, teacher_id: &str) -> Vec<ActivityRecord> {
        self.records
            .iter()
            .filter(|r| r.is_by_teacher(teacher_id))
            .cloned()
            .collect()
    }

    /// 指定されたフィルタをすべて満たす記録を元の順序で返す
    pub fn filter(&self, filter: &ActivityFilterDto) -> Vec<ActivityRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }
}
