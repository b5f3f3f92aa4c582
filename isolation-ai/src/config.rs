//! 搜索配置

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::heuristics::Heuristic;

/// 默认固定搜索深度
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// 默认超时阈值（毫秒）
pub const DEFAULT_TIMEOUT_MS: f64 = 10.0;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 搜索深度必须至少为 1
    #[error("Search depth must be at least 1")]
    InvalidDepth,

    /// 超时阈值必须是非负有限值
    #[error("Invalid timeout threshold: {0} ms")]
    InvalidTimeout(f64),

    /// JSON 解析错误
    #[error("Failed to parse search config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 搜索配置
///
/// 每个智能体持有一份，创建后不再修改
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 固定深度搜索的层数（迭代加深不使用）
    pub search_depth: u32,
    /// 评估函数
    pub heuristic: Heuristic,
    /// 剩余时间低于此值（毫秒）时中止搜索
    pub timeout_ms: f64,
}

impl SearchConfig {
    pub fn new(search_depth: u32, heuristic: Heuristic) -> Self {
        Self {
            search_depth,
            heuristic,
            ..Self::default()
        }
    }

    pub fn with_depth(mut self, search_depth: u32) -> Self {
        self.search_depth = search_depth;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_timeout(mut self, timeout_ms: f64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        if !self.timeout_ms.is_finite() || self.timeout_ms < 0.0 {
            return Err(ConfigError::InvalidTimeout(self.timeout_ms));
        }
        Ok(())
    }

    /// 从 JSON 解析并校验
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            heuristic: Heuristic::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.search_depth, 3);
        assert_eq!(config.heuristic, Heuristic::Lookahead);
        assert_eq!(config.timeout_ms, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::new(5, Heuristic::Distance).with_timeout(25.0);
        assert_eq!(config.search_depth, 5);
        assert_eq!(config.heuristic, Heuristic::Distance);
        assert_eq!(config.timeout_ms, 25.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            SearchConfig::default().with_depth(0).validate(),
            Err(ConfigError::InvalidDepth)
        ));
        assert!(matches!(
            SearchConfig::default().with_timeout(-1.0).validate(),
            Err(ConfigError::InvalidTimeout(_))
        ));
        assert!(matches!(
            SearchConfig::default().with_timeout(f64::NAN).validate(),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = SearchConfig::from_json(r#"{"heuristic": "CounterCenter"}"#).unwrap();
        assert_eq!(config.heuristic, Heuristic::CounterCenter);
        assert_eq!(config.search_depth, DEFAULT_SEARCH_DEPTH);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);

        assert!(matches!(
            SearchConfig::from_json(r#"{"search_depth": 0}"#),
            Err(ConfigError::InvalidDepth)
        ));
        assert!(matches!(
            SearchConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
