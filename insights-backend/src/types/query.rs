use serde::{Deserialize, Deserializer};
use serde_json::Number;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(Number),
}

/// 文字列または数値のIDを文字列としてデシリアライズ
///
/// 数値は serde_json の表記のまま文字列化するので、u64 の範囲でも桁が失われない。
pub fn deserialize_id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

/// クエリ文字列の (キー, 値) の並びから、キーごとに最初の値を取り出す
///
/// 空文字列は未指定として扱う。
pub fn first_query_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .filter(|v| !v.is_empty())
}
