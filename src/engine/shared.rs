// ==========================================
// 装箱排产系统 - 共享规划器
// ==========================================
// 职责: 跨线程共享 Planner 时的粗粒度互斥
// 红线: 一次操作（含完整一轮装箱）全程持有同一把锁，
//       不对箱子列表或队列单独加锁
// ==========================================

use crate::domain::container::Container;
use crate::domain::item::Item;
use crate::domain::types::EnqueueOutcome;
use crate::engine::allocation::PassSummary;
use crate::engine::planner::Planner;
use crate::engine::reporter::PackingReport;
use crate::error::{PackError, Result};
use std::sync::{Arc, Mutex, MutexGuard};

/// 可克隆的共享句柄，克隆体指向同一个 Planner
#[derive(Clone)]
pub struct SharedPlanner {
    inner: Arc<Mutex<Planner>>,
}

impl SharedPlanner {
    pub fn new(planner: Planner) -> Self {
        Self {
            inner: Arc::new(Mutex::new(planner)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Planner>> {
        self.inner
            .lock()
            .map_err(|e| PackError::LockPoisoned(e.to_string()))
    }

    pub fn add_container(&self, container: Container) -> Result<()> {
        self.lock()?.add_container(container);
        Ok(())
    }

    pub fn enqueue(&self, item: Item) -> Result<EnqueueOutcome> {
        self.lock()?.enqueue(item)
    }

    /// 整轮装箱期间持锁
    pub fn run_greedy_pass(&self) -> Result<PassSummary> {
        self.lock()?.run_greedy_pass()
    }

    pub fn report(&self) -> Result<PackingReport> {
        Ok(self.lock()?.report())
    }

    /// 在锁内执行任意只读/读写操作
    pub fn with_planner<T>(&self, f: impl FnOnce(&mut Planner) -> T) -> Result<T> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_enqueue_and_pass_conserve_items() {
        let shared = SharedPlanner::new(Planner::new());
        shared
            .add_container(Container::new("A", 100.0).unwrap())
            .unwrap();

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for n in 0..10 {
                        let item = Item::new(format!("w{}-{}", worker, n), 1.0).unwrap();
                        shared.enqueue(item).unwrap();
                        let _ = shared.run_greedy_pass();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let report = shared.report().unwrap();
        let packed: usize = report.containers.iter().map(|c| c.items.len()).sum();
        assert_eq!(packed + report.pending.len(), 40);
        assert_eq!(report.totals.total_used_volume, 40.0);
    }

    #[test]
    fn test_poisoned_lock_reported() {
        let shared = SharedPlanner::new(Planner::new());
        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            let _ = poisoner.with_planner(|_| panic!("boom"));
        })
        .join();

        assert!(matches!(
            shared.enqueue(Item::new("x", 1.0).unwrap()),
            Err(PackError::LockPoisoned(_))
        ));
    }
}
