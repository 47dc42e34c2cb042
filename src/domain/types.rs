// ==========================================
// 装箱排产系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 重复键策略 (Duplicate Policy)
// ==========================================
// 队列中 (volume, name) 相同的物品如何处理
// 序列化格式: SCREAMING_SNAKE_CASE (与配置文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuplicatePolicy {
    #[default]
    Collapse, // 合并: 后入队的相同物品被丢弃
    KeepAll,  // 保留: 以入队序号作为最终排序键
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl DuplicatePolicy {
    /// 从配置字符串解析（大小写不敏感）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "COLLAPSE" => Some(DuplicatePolicy::Collapse),
            "KEEP_ALL" => Some(DuplicatePolicy::KeepAll),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Collapse => "COLLAPSE",
            DuplicatePolicy::KeepAll => "KEEP_ALL",
        }
    }
}

// ==========================================
// 超大物品检查时机 (Oversize Check)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OversizeCheck {
    #[default]
    AtEnqueue, // 入队时对照当前已登记箱子检查
    Deferred,  // 入队不检查，留到装箱时体现为部分失败
}

impl fmt::Display for OversizeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OversizeCheck {
    /// 从配置字符串解析（大小写不敏感）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "AT_ENQUEUE" => Some(OversizeCheck::AtEnqueue),
            "DEFERRED" => Some(OversizeCheck::Deferred),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OversizeCheck::AtEnqueue => "AT_ENQUEUE",
            OversizeCheck::Deferred => "DEFERRED",
        }
    }
}

// ==========================================
// 入队结果 (Enqueue Outcome)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnqueueOutcome {
    Queued,    // 已进入队列
    Collapsed, // 与已排队物品键相同，被丢弃
}

impl fmt::Display for EnqueueOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnqueueOutcome::Queued => write!(f, "QUEUED"),
            EnqueueOutcome::Collapsed => write!(f, "COLLAPSED"),
        }
    }
}
