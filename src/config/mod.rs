// src/config/mod.rs
//! アプリの設定。JS から JSON 文字列で渡してもらって、ここでパースするよ。

pub mod api;

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
    #[error("`max_fetch_attempts` must be at least 1")]
    ZeroAttempts,
}

impl From<ConfigError> for wasm_bindgen::JsValue {
    fn from(e: ConfigError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

/// GameApp の設定。省略したフィールドはデフォルト値になる。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub api_base_url: String,
    pub max_fetch_attempts: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: api::JIKAN_BASE_URL.to_string(),
            max_fetch_attempts: api::DEFAULT_MAX_FETCH_ATTEMPTS,
            log_level: api::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// JSON 文字列から設定を読み込む。`None` や空文字ならデフォルト。
    pub fn from_json(json: Option<&str>) -> Result<Self, ConfigError> {
        let config = match json.map(str::trim) {
            Some(text) if !text.is_empty() => serde_json::from_str::<AppConfig>(text)?,
            _ => AppConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_fetch_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// 末尾のスラッシュを落としたベース URL。
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
