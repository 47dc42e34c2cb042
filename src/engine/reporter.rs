// ==========================================
// 装箱排产系统 - 装箱报表
// ==========================================
// 职责: 箱子与剩余队列的只读汇总
// 红线: 不修改任何状态，任意时刻（含部分失败后）均可调用
// 输出: 结构化数据，由外部展示层自行格式化
// ==========================================

use crate::domain::container::Container;
use crate::domain::item::Item;
use crate::engine::queue::PriorityQueue;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 物品快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub name: String,
    pub volume: f64,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name().to_string(),
            volume: item.volume(),
        }
    }
}

/// 单箱快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerSnapshot {
    pub id: String,
    pub capacity: f64,
    pub used_volume: f64,
    pub remaining_space: f64,
    pub fill_percentage: f64,
    pub items: Vec<ItemView>, // 装入顺序
}

/// 全部箱子的汇总量
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PackingTotals {
    pub total_capacity: f64,
    pub total_used_volume: f64,
    pub overall_fill_percentage: f64,
    pub container_count: usize,
    pub pending_count: usize,
}

/// 完整装箱报表
#[derive(Debug, Clone, Serialize)]
pub struct PackingReport {
    pub generated_at: DateTime<Utc>,
    pub containers: Vec<ContainerSnapshot>,
    pub pending: Vec<ItemView>, // 优先级顺序
    pub totals: PackingTotals,
}

// ==========================================
// Reporter - 报表生成器
// ==========================================
pub struct Reporter {
    // 无状态
}

impl Reporter {
    pub fn new() -> Self {
        Self {}
    }

    /// 单箱快照
    pub fn snapshot_container(&self, container: &Container) -> ContainerSnapshot {
        ContainerSnapshot {
            id: container.id().to_string(),
            capacity: container.capacity(),
            used_volume: container.current_volume(),
            remaining_space: container.remaining_space(),
            fill_percentage: container.fill_percentage(),
            items: container.packed_items().iter().map(ItemView::from).collect(),
        }
    }

    /// 全部箱子快照（登记顺序）
    pub fn snapshot_containers(&self, containers: &[Container]) -> Vec<ContainerSnapshot> {
        containers.iter().map(|c| self.snapshot_container(c)).collect()
    }

    /// 剩余队列快照（优先级顺序）
    pub fn snapshot_pending(&self, queue: &PriorityQueue) -> Vec<ItemView> {
        queue.iter().map(ItemView::from).collect()
    }

    /// 汇总量
    ///
    /// 总容量为 0（无箱子）时整体填充率记为 0
    pub fn totals(&self, containers: &[Container], queue: &PriorityQueue) -> PackingTotals {
        let total_capacity: f64 = containers.iter().map(Container::capacity).sum();
        let total_used_volume: f64 = containers.iter().map(Container::current_volume).sum();
        let overall_fill_percentage = if total_capacity > 0.0 {
            total_used_volume / total_capacity * 100.0
        } else {
            0.0
        };

        PackingTotals {
            total_capacity,
            total_used_volume,
            overall_fill_percentage,
            container_count: containers.len(),
            pending_count: queue.len(),
        }
    }

    /// 生成完整报表
    pub fn report(&self, containers: &[Container], queue: &PriorityQueue) -> PackingReport {
        PackingReport {
            generated_at: Utc::now(),
            containers: self.snapshot_containers(containers),
            pending: self.snapshot_pending(queue),
            totals: self.totals(containers, queue),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
