// ==========================================
// 装箱排产系统 - 规划器配置
// ==========================================
// 职责: 配置加载与覆写
// 优先级（低 → 高）: 默认值 → JSON 配置 → 环境变量
// ==========================================

use crate::domain::types::{DuplicatePolicy, OversizeCheck};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    /// 重复键策略: COLLAPSE / KEEP_ALL
    pub const DUPLICATE_POLICY: &str = "PACK_PLANNER_DUPLICATE_POLICY";

    /// 超大物品检查时机: AT_ENQUEUE / DEFERRED
    pub const OVERSIZE_CHECK: &str = "PACK_PLANNER_OVERSIZE_CHECK";

    /// 日志格式: text / json
    pub const LOG_FORMAT: &str = "PACK_PLANNER_LOG_FORMAT";
}

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置值无效: {key}={value}")]
    InvalidValue { key: String, value: String },
}

// ==========================================
// PlannerConfig - 规划器配置
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// 重复键策略（默认 COLLAPSE）
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// 超大物品检查时机（默认 AT_ENQUEUE）
    #[serde(default)]
    pub oversize_check: OversizeCheck,
}

impl PlannerConfig {
    /// 从 JSON 字符串解析，缺失字段取默认值
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), ?config, "已加载规划器配置");
        Ok(config)
    }

    /// 应用环境变量覆写
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// 按键查询覆写值（空白值视为未设置）
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = get(config_keys::DUPLICATE_POLICY) {
            self.duplicate_policy =
                DuplicatePolicy::parse(&raw).ok_or_else(|| ConfigError::InvalidValue {
                    key: config_keys::DUPLICATE_POLICY.to_string(),
                    value: raw.clone(),
                })?;
            debug!(duplicate_policy = %self.duplicate_policy, "环境变量覆写");
        }

        if let Some(raw) = get(config_keys::OVERSIZE_CHECK) {
            self.oversize_check =
                OversizeCheck::parse(&raw).ok_or_else(|| ConfigError::InvalidValue {
                    key: config_keys::OVERSIZE_CHECK.to_string(),
                    value: raw.clone(),
                })?;
            debug!(oversize_check = %self.oversize_check, "环境变量覆写");
        }

        Ok(())
    }
}
