use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// タイムゾーン情報のない日時として受け付けるフォーマット
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// 元データの文字列をそのまま保持しつつ、ローカル日時としても解釈した値
///
/// シリアライズ時は元の文字列を返すので、レスポンスのJSONはデータファイルと一致する。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityTimestamp {
    raw: String,
    local: NaiveDateTime,
}

impl ActivityTimestamp {
    /// RFC 3339（オフセット付き）はサーバーのローカルタイムゾーンへ変換し、
    /// オフセットなしの日時・日付はすでにローカル時刻として扱う。
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();

        let local = DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| dt.with_timezone(&Local).naive_local())
            .ok()
            .or_else(|| {
                NAIVE_DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            })
            .or_else(|| {
                NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })?;

        Some(Self {
            raw: raw.to_string(),
            local,
        })
    }

    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    pub fn local_date(&self) -> NaiveDate {
        self.local.date()
    }
}

impl Serialize for ActivityTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ActivityTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", raw)))
    }
}
