// ==========================================
// 装箱排产系统 - 贪心装箱引擎
// ==========================================
// 红线: 容量约束优先于物品优先级，物品不可丢失
// ==========================================
// 职责: 一轮贪心最佳适配装箱
// 输入: 箱子列表 + 待装队列
// 输出: 装箱明细；未装入物品退回队列并以 PartialPackingFailure 报告
// ==========================================

use crate::domain::container::Container;
use crate::engine::queue::{PriorityQueue, QueueEntry};
use crate::error::{PackError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// 单件物品的装箱记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub item_name: String,
    pub volume: f64,
    pub container_id: String,
    pub container_index: usize, // 箱子在登记列表中的位置（编号可重复）
}

/// 一轮完整装箱的结果（全部装入时返回）
#[derive(Debug, Clone, Serialize)]
pub struct PassSummary {
    pub pass_id: Uuid,
    pub placements: Vec<Placement>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl PassSummary {
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }
}

// ==========================================
// AllocationEngine - 贪心装箱引擎
// ==========================================
pub struct AllocationEngine {
    // 无状态引擎，状态由 Planner 持有
}

impl AllocationEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行一轮贪心装箱
    ///
    /// 规则:
    /// 1) 队列按优先级逐件弹出（体积大者先）
    /// 2) 每件物品重新按当前剩余空间升序排列箱子（最紧适配优先）
    /// 3) 依次调用 try_place，首个成功者即落位
    /// 4) 无箱可装的物品暂存本轮缓冲区，不在本轮内回队
    /// 5) 队列排空后缓冲区物品全部退回队列，并返回 PartialPackingFailure
    ///
    /// # 参数
    /// - `containers`: 箱子列表（会被修改）
    /// - `queue`: 待装队列（会被排空后按需恢复）
    ///
    /// # 返回
    /// - `Ok(PassSummary)`: 全部装入
    /// - `Err(NoContainersAvailable)`: 无箱子，状态不变
    /// - `Err(PartialPackingFailure)`: 部分物品未装入，已退回队列
    #[instrument(skip_all, fields(
        pass_id = tracing::field::Empty,
        containers_count = containers.len(),
        queued_count = queue.len()
    ))]
    pub fn run_greedy_pass(
        &self,
        containers: &mut [Container],
        queue: &mut PriorityQueue,
    ) -> Result<PassSummary> {
        if containers.is_empty() {
            warn!("没有可用的箱子，跳过本轮装箱");
            return Err(PackError::NoContainersAvailable);
        }

        let pass_id = Uuid::new_v4();
        tracing::Span::current().record("pass_id", tracing::field::display(pass_id));
        let started_at = Utc::now();

        let mut placements = Vec::new();
        let mut pending_repack: Vec<QueueEntry> = Vec::new();

        while let Some(entry) = queue.pop() {
            match self.place_best_fit(containers, entry) {
                Ok(placement) => {
                    debug!(
                        item = %placement.item_name,
                        volume = placement.volume,
                        container = %placement.container_id,
                        "物品已装箱"
                    );
                    placements.push(placement);
                }
                Err(entry) => {
                    warn!(item = %entry.item(), "没有箱子能容纳该物品，本轮暂存");
                    pending_repack.push(entry);
                }
            }
        }

        if !pending_repack.is_empty() {
            let mut unplaced = Vec::with_capacity(pending_repack.len());
            for entry in pending_repack {
                let item = entry.item().clone();
                if !queue.restore(entry) {
                    // 本轮持有队列独占借用，退回不应与已有条目冲突
                    warn!(item = %item, "退回队列时发现重复条目");
                    debug_assert!(false, "restore collided for {}", item);
                }
                unplaced.push(item);
            }

            info!(
                placed = placements.len(),
                unplaced = unplaced.len(),
                "装箱未全部完成，未装入物品已退回队列"
            );
            return Err(PackError::PartialPackingFailure {
                unplaced,
                placements,
            });
        }

        info!(placed = placements.len(), "装箱完成");
        Ok(PassSummary {
            pass_id,
            placements,
            started_at,
            finished_at: Utc::now(),
        })
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 按最紧适配顺序尝试装入单件物品
    ///
    /// # 返回
    /// - `Ok(Placement)`: 装入成功
    /// - `Err(entry)`: 所有箱子都拒绝，条目原样退回
    fn place_best_fit(
        &self,
        containers: &mut [Container],
        entry: QueueEntry,
    ) -> std::result::Result<Placement, QueueEntry> {
        let (mut item, seq) = entry.into_parts();
        let item_name = item.name().to_string();
        let volume = item.volume();

        for idx in self.scan_order(containers) {
            match containers[idx].try_place(item) {
                Ok(()) => {
                    return Ok(Placement {
                        item_name,
                        volume,
                        container_id: containers[idx].id().to_string(),
                        container_index: idx,
                    });
                }
                Err(rejected) => item = rejected,
            }
        }

        Err(QueueEntry::from_parts(item, seq))
    }

    /// 箱子扫描顺序: 当前剩余空间升序，相同剩余空间保持登记顺序
    pub fn scan_order(&self, containers: &[Container]) -> Vec<usize> {
        let mut order: Vec<(usize, f64)> = containers
            .iter()
            .enumerate()
            .map(|(idx, c)| (idx, c.remaining_space()))
            .collect();
        order.sort_by(|a, b| a.1.total_cmp(&b.1));
        order.into_iter().map(|(idx, _)| idx).collect()
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new()
    }
}
