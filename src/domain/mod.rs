// ==========================================
// 装箱排产系统 - 领域模型层
// ==========================================
// 职责: 定义物品、箱子及领域类型
// 红线: 不含引擎逻辑，容量约束仅由箱子自身门控
// ==========================================

pub mod container;
pub mod item;
pub mod types;

// 重导出核心类型
pub use container::Container;
pub use item::Item;
pub use types::{DuplicatePolicy, EnqueueOutcome, OversizeCheck};
