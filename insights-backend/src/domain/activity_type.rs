// src/domain/activity_type.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// 集計対象となるアクティビティの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Lesson,
    Quiz,
    Assessment,
}

impl ActivityType {
    /// 文字列からActivityTypeに変換（完全一致のみ、未知の種類は None）
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "lesson" => Some(Self::Lesson),
            "quiz" => Some(Self::Quiz),
            "assessment" => Some(Self::Assessment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Quiz => "quiz",
            Self::Assessment => "assessment",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Lesson, Self::Quiz, Self::Assessment]
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
