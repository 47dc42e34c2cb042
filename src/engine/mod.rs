// ==========================================
// 装箱排产系统 - 引擎层
// ==========================================
// 职责: 待装队列、贪心装箱、报表、规划器聚合根
// 红线: 容量约束只经 Container::try_place 门控，物品不可丢失
// ==========================================

pub mod allocation;
pub mod planner;
pub mod queue;
pub mod reporter;
pub mod shared;

// 重导出核心引擎
pub use allocation::{AllocationEngine, PassSummary, Placement};
pub use planner::Planner;
pub use queue::PriorityQueue;
pub use reporter::{ContainerSnapshot, ItemView, PackingReport, PackingTotals, Reporter};
pub use shared::SharedPlanner;
