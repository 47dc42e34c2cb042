// ==========================================
// 装箱排产系统 - 导入层
// ==========================================
// 职责: 读取场景文件/物品清单，构建 Planner
// 红线: 非法数据不进入 Planner，以拒收记录反馈
// ==========================================

pub mod error;
pub mod file_parser;
pub mod scenario;

// 重导出
pub use error::ImportError;
pub use file_parser::{CsvItemParser, ScenarioParser};
pub use scenario::{ContainerSpec, ItemSpec, LoadOutcome, RejectedSubject, Rejection, Scenario};
