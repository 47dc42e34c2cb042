// ==========================================
// 装箱排产系统 - 装箱规划器
// ==========================================
// 职责: 聚合根，独占箱子列表与待装队列
// 红线: 内部集合只暴露只读视图，物品只能经 enqueue 进入队列
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::container::Container;
use crate::domain::item::Item;
use crate::domain::types::{EnqueueOutcome, OversizeCheck};
use crate::engine::allocation::{AllocationEngine, PassSummary};
use crate::engine::queue::PriorityQueue;
use crate::engine::reporter::{ContainerSnapshot, ItemView, PackingReport, PackingTotals, Reporter};
use crate::error::{PackError, Result};
use tracing::{debug, info, warn};

// ==========================================
// Planner - 装箱规划器
// ==========================================
pub struct Planner {
    config: PlannerConfig,
    containers: Vec<Container>, // 登记顺序，不去重
    queue: PriorityQueue,
    engine: AllocationEngine,
    reporter: Reporter,
}

impl Planner {
    /// 使用默认配置创建规划器
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    /// 使用指定配置创建规划器
    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            config,
            containers: Vec::new(),
            queue: PriorityQueue::new(config.duplicate_policy),
            engine: AllocationEngine::new(),
            reporter: Reporter::new(),
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    // ==========================================
    // 变更操作
    // ==========================================

    /// 登记箱子（不校验编号唯一性）
    pub fn add_container(&mut self, container: Container) {
        debug!(
            container = %container.id(),
            capacity = container.capacity(),
            "登记箱子"
        );
        self.containers.push(container);
    }

    /// 物品入队
    ///
    /// 规则:
    /// 1) AT_ENQUEUE 模式且已有箱子时，体积超过全部箱子容量即拒绝（仅对照当前已登记箱子）
    /// 2) 否则按优先级插入队列；COLLAPSE 策略下相同键的新物品被丢弃
    ///
    /// # 返回
    /// - `Ok(Queued)`: 已入队
    /// - `Ok(Collapsed)`: 与已排队物品键相同，被丢弃
    /// - `Err(Unplaceable)`: 放不进任何已登记箱子，队列不变
    pub fn enqueue(&mut self, item: Item) -> Result<EnqueueOutcome> {
        if self.config.oversize_check == OversizeCheck::AtEnqueue {
            if let Some(max_capacity) = self.max_capacity() {
                if item.volume() > max_capacity {
                    warn!(item = %item, max_capacity, "物品超过所有箱子容量，拒绝入队");
                    return Err(PackError::Unplaceable {
                        name: item.name().to_string(),
                        volume: item.volume(),
                        max_capacity,
                    });
                }
            }
        }

        let label = item.to_string();
        let outcome = self.queue.push(item);
        match outcome {
            EnqueueOutcome::Queued => debug!(item = %label, "物品入队"),
            EnqueueOutcome::Collapsed => {
                warn!(item = %label, "队列中已有相同物品，新物品被合并丢弃")
            }
        }
        Ok(outcome)
    }

    /// 执行一轮贪心装箱
    ///
    /// 见 [`AllocationEngine::run_greedy_pass`]
    pub fn run_greedy_pass(&mut self) -> Result<PassSummary> {
        info!(
            containers = self.containers.len(),
            queued = self.queue.len(),
            "开始贪心装箱"
        );
        self.engine
            .run_greedy_pass(&mut self.containers, &mut self.queue)
    }

    // ==========================================
    // 只读视图
    // ==========================================

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn queue(&self) -> &PriorityQueue {
        &self.queue
    }

    pub fn container_snapshots(&self) -> Vec<ContainerSnapshot> {
        self.reporter.snapshot_containers(&self.containers)
    }

    pub fn pending_snapshot(&self) -> Vec<ItemView> {
        self.reporter.snapshot_pending(&self.queue)
    }

    pub fn totals(&self) -> PackingTotals {
        self.reporter.totals(&self.containers, &self.queue)
    }

    pub fn report(&self) -> PackingReport {
        self.reporter.report(&self.containers, &self.queue)
    }

    /// 已登记箱子的最大容量（无箱子时为 None）
    fn max_capacity(&self) -> Option<f64> {
        self.containers
            .iter()
            .map(Container::capacity)
            .max_by(|a, b| a.total_cmp(b))
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}
