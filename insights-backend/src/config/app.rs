use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// データファイルのデフォルトパス（作業ディレクトリからの相対パス）
pub const DEFAULT_DATA_PATH: &str = "data/teacher_activity_data.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            Self::Any
        } else {
            Self::List(origins)
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub cors_allowed_origins: CorsOrigins,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            data_path: env::var("DATA_PATH")
                .map_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map_or(CorsOrigins::Any, |raw| CorsOrigins::parse(&raw)),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            cors_allowed_origins: CorsOrigins::Any,
        }
    }
}
