// ==========================================
// 装箱排产系统 - 优先级队列
// ==========================================
// 职责: 待装物品的有序暂存区
// 排序: 体积降序 → 名称升序 → 入队序号（仅 KEEP_ALL 策略）
// 说明: COLLAPSE 策略下入队序号恒为 0，相同键的物品只保留先入队者
// ==========================================

use crate::domain::item::Item;
use crate::domain::types::{DuplicatePolicy, EnqueueOutcome};
use std::collections::BTreeSet;

/// 队列条目（派生 Ord: 先比物品，再比序号）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct QueueEntry {
    item: Item,
    seq: u64,
}

impl QueueEntry {
    pub(crate) fn item(&self) -> &Item {
        &self.item
    }

    pub(crate) fn into_parts(self) -> (Item, u64) {
        (self.item, self.seq)
    }

    pub(crate) fn from_parts(item: Item, seq: u64) -> Self {
        Self { item, seq }
    }
}

// ==========================================
// PriorityQueue - 待装队列
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue {
    entries: BTreeSet<QueueEntry>,
    policy: DuplicatePolicy,
    next_seq: u64,
}

impl PriorityQueue {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            entries: BTreeSet::new(),
            policy,
            next_seq: 0,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按优先级顺序遍历（只读）
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.entries.iter().map(QueueEntry::item)
    }

    /// 队首（最高优先级）物品
    pub fn peek(&self) -> Option<&Item> {
        self.entries.first().map(QueueEntry::item)
    }

    /// 按键查找（KEEP_ALL 下同键可能有多个序号，按区间查）
    pub fn contains(&self, item: &Item) -> bool {
        let lower = QueueEntry::from_parts(item.clone(), 0);
        let upper = QueueEntry::from_parts(item.clone(), u64::MAX);
        self.entries.range(lower..=upper).next().is_some()
    }

    // ==========================================
    // 变更操作（仅 crate 内部，经由 Planner 调用）
    // ==========================================

    /// 插入物品
    ///
    /// # 返回
    /// - `Queued`: 已入队
    /// - `Collapsed`: COLLAPSE 策略下已存在相同键，新物品被丢弃
    pub(crate) fn push(&mut self, item: Item) -> EnqueueOutcome {
        let seq = match self.policy {
            DuplicatePolicy::Collapse => 0,
            DuplicatePolicy::KeepAll => {
                let seq = self.next_seq;
                self.next_seq += 1;
                seq
            }
        };

        if self.entries.insert(QueueEntry { item, seq }) {
            EnqueueOutcome::Queued
        } else {
            EnqueueOutcome::Collapsed
        }
    }

    /// 弹出最高优先级条目
    pub(crate) fn pop(&mut self) -> Option<QueueEntry> {
        self.entries.pop_first()
    }

    /// 原样退回条目（保留原入队序号）
    pub(crate) fn restore(&mut self, entry: QueueEntry) -> bool {
        self.entries.insert(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, volume: f64) -> Item {
        Item::new(name, volume).unwrap()
    }

    fn drain_names(queue: &mut PriorityQueue) -> Vec<String> {
        let mut names = Vec::new();
        while let Some(entry) = queue.pop() {
            let (item, _) = entry.into_parts();
            names.push(item.name().to_string());
        }
        names
    }

    #[test]
    fn test_drain_order_independent_of_insertion_order() {
        let items = [("b", 5.0), ("a", 5.0), ("z", 9.0), ("m", 1.0)];

        let mut forward = PriorityQueue::new(DuplicatePolicy::Collapse);
        for (name, volume) in items {
            forward.push(item(name, volume));
        }
        let mut backward = PriorityQueue::new(DuplicatePolicy::Collapse);
        for (name, volume) in items.iter().rev() {
            backward.push(item(name, *volume));
        }

        let expected = vec!["z", "a", "b", "m"];
        assert_eq!(drain_names(&mut forward), expected);
        assert_eq!(drain_names(&mut backward), expected);
    }

    #[test]
    fn test_collapse_drops_equal_key() {
        let mut queue = PriorityQueue::new(DuplicatePolicy::Collapse);
        assert_eq!(queue.push(item("Sofa", 30.0)), EnqueueOutcome::Queued);
        assert_eq!(queue.push(item("Sofa", 30.0)), EnqueueOutcome::Collapsed);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.policy(), DuplicatePolicy::Collapse);
        assert!(queue.contains(&item("Sofa", 30.0)));
        assert!(!queue.contains(&item("Sofa", 31.0)));
    }

    #[test]
    fn test_keep_all_retains_duplicates_in_insertion_order() {
        let mut queue = PriorityQueue::new(DuplicatePolicy::KeepAll);
        assert_eq!(queue.push(item("Sofa", 30.0)), EnqueueOutcome::Queued);
        assert_eq!(queue.push(item("Sofa", 30.0)), EnqueueOutcome::Queued);
        assert_eq!(queue.push(item("Chair", 30.0)), EnqueueOutcome::Queued);
        assert_eq!(queue.len(), 3);

        let first = queue.pop().unwrap();
        assert_eq!(first.item().name(), "Chair");
        let second = queue.pop().unwrap();
        let third = queue.pop().unwrap();
        assert!(second.seq < third.seq);
    }

    #[test]
    fn test_contains_finds_any_sequence_under_keep_all() {
        let mut queue = PriorityQueue::new(DuplicatePolicy::KeepAll);
        queue.push(item("a", 9.0));
        queue.push(item("Sofa", 30.0));
        queue.push(item("Sofa", 30.0));
        queue.push(item("z", 1.0));

        assert!(queue.contains(&item("Sofa", 30.0)));
        assert!(queue.contains(&item("z", 1.0)));
        assert!(!queue.contains(&item("Sofa", 9.0)));
        assert!(!queue.contains(&item("b", 9.0)));

        queue.pop();
        queue.pop();
        assert!(!queue.contains(&item("Sofa", 30.0)));
    }

    #[test]
    fn test_restore_keeps_position() {
        let mut queue = PriorityQueue::new(DuplicatePolicy::KeepAll);
        queue.push(item("x", 3.0));
        queue.push(item("y", 2.0));

        let top = queue.pop().unwrap();
        assert_eq!(queue.peek().map(Item::name), Some("y"));
        assert!(queue.restore(top));
        assert_eq!(queue.peek().map(Item::name), Some("x"));
    }
}
