// ==========================================
// 装箱排产系统 - 核心库
// ==========================================
// 系统定位: 容量受限的贪心装箱规划（确定性启发式，非最优解）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 错误类型
pub mod error;

// 领域层 - 物品、箱子、领域类型
pub mod domain;

// 引擎层 - 队列、贪心装箱、报表、规划器
pub mod engine;

// 配置层 - 规划器行为开关
pub mod config;

// 导入层 - 场景文件与物品清单
pub mod importer;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{ConfigError, PlannerConfig};
pub use domain::{Container, DuplicatePolicy, EnqueueOutcome, Item, OversizeCheck};
pub use engine::{
    AllocationEngine, PackingReport, PassSummary, Placement, Planner, PriorityQueue, Reporter,
    SharedPlanner,
};
pub use error::PackError;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "装箱排产系统";
