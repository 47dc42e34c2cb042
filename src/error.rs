// ==========================================
// 装箱排产系统 - 核心错误类型
// ==========================================
// 职责: 构造校验、入队校验、装箱过程的统一错误分类
// 工具: thiserror 派生宏
// 说明: 所有错误均可恢复，调用方按变体穷举处理
// ==========================================

use crate::domain::item::Item;
use crate::engine::allocation::Placement;
use thiserror::Error;

/// 核心层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackError {
    // ===== 构造校验错误 =====
    /// 体积/容量非正或非有限数
    #[error("尺寸无效: {subject}={value} (必须为有限正数)")]
    InvalidDimension { subject: String, value: f64 },

    /// 名称/编号为空白
    #[error("名称无效: {0} 不能为空白")]
    InvalidName(String),

    // ===== 入队错误 =====
    /// 物品体积超过所有已登记箱子的容量
    #[error("物品无法放入任何箱子: item={name}, volume={volume}, max_capacity={max_capacity}")]
    Unplaceable {
        name: String,
        volume: f64,
        max_capacity: f64,
    },

    // ===== 装箱过程错误 =====
    /// 未登记任何箱子
    #[error("没有可用的箱子，装箱未执行")]
    NoContainersAvailable,

    /// 本轮存在未装入的物品，已全部退回队列
    #[error("部分物品未能装箱: unplaced={} placed={}", unplaced.len(), placements.len())]
    PartialPackingFailure {
        unplaced: Vec<Item>,
        placements: Vec<Placement>,
    },

    // ===== 共享访问错误 =====
    #[error("规划器锁获取失败: {0}")]
    LockPoisoned(String),
}

impl PackError {
    /// 本轮未装入的物品（仅 PartialPackingFailure 有值）
    pub fn unplaced_items(&self) -> &[Item] {
        match self {
            PackError::PartialPackingFailure { unplaced, .. } => unplaced,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
