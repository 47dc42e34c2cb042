// ==========================================
// 装箱排产系统 - 配置层
// ==========================================
// 职责: 规划器行为开关（重复键策略、超大物品检查时机）
// 来源: 默认值 / JSON / 环境变量
// ==========================================

pub mod planner_config;

// 重导出
pub use planner_config::{config_keys, ConfigError, PlannerConfig};
