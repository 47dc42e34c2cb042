// ==========================================
// 装箱排产系统 - 装箱场景
// ==========================================
// 职责: 场景数据 → Planner
// 流程: 先登记全部箱子，再逐件入队
// 说明: 单件校验/入队失败记为拒收原因，不中断整体加载
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::container::Container;
use crate::domain::item::Item;
use crate::domain::types::EnqueueOutcome;
use crate::engine::planner::Planner;
use crate::error::PackError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// 物品原始数据（未校验）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub volume: f64,
}

/// 箱子原始数据（未校验）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub id: String,
    pub capacity: f64,
}

/// 场景文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: Option<PlannerConfig>,
    #[serde(default)]
    pub containers: Vec<ContainerSpec>,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

/// 拒收记录
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub subject: RejectedSubject,
    pub label: String,
    pub reason: PackError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectedSubject {
    Container,
    Item,
}

/// 场景加载结果
pub struct LoadOutcome {
    pub planner: Planner,
    pub rejections: Vec<Rejection>,
    pub collapsed: Vec<String>, // 因重复键被合并丢弃的物品名
}

impl Scenario {
    /// 场景自带配置（若无则取默认值）
    pub fn effective_config(&self) -> PlannerConfig {
        self.config.unwrap_or_default()
    }

    /// 构建规划器
    ///
    /// # 参数
    /// - `config`: 规划器配置（调用方已合并场景配置与环境变量覆写）
    pub fn load(&self, config: PlannerConfig) -> LoadOutcome {
        let mut planner = Planner::with_config(config);
        let mut rejections = Vec::new();
        let mut collapsed = Vec::new();

        // 1. 登记箱子
        for spec in &self.containers {
            match Container::new(spec.id.clone(), spec.capacity) {
                Ok(container) => planner.add_container(container),
                Err(reason) => {
                    warn!(container = %spec.id, %reason, "箱子被拒收");
                    rejections.push(Rejection {
                        subject: RejectedSubject::Container,
                        label: spec.id.clone(),
                        reason,
                    });
                }
            }
        }

        // 2. 物品入队
        for spec in &self.items {
            let result = Item::new(spec.name.clone(), spec.volume)
                .and_then(|item| planner.enqueue(item));
            match result {
                Ok(EnqueueOutcome::Queued) => {}
                Ok(EnqueueOutcome::Collapsed) => collapsed.push(spec.name.clone()),
                Err(reason) => {
                    warn!(item = %spec.name, %reason, "物品被拒收");
                    rejections.push(Rejection {
                        subject: RejectedSubject::Item,
                        label: spec.name.clone(),
                        reason,
                    });
                }
            }
        }

        info!(
            containers = planner.containers().len(),
            queued = planner.queue().len(),
            rejected = rejections.len(),
            collapsed = collapsed.len(),
            "场景加载完成"
        );

        LoadOutcome {
            planner,
            rejections,
            collapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::DuplicatePolicy;

    fn scenario_json() -> &'static str {
        r#"{
            "config": { "duplicate_policy": "COLLAPSE" },
            "containers": [
                { "id": "A", "capacity": 10 },
                { "id": "Broken", "capacity": -1 }
            ],
            "items": [
                { "name": "TV", "volume": 8 },
                { "name": "TV", "volume": 8 },
                { "name": "Elephant", "volume": 100 },
                { "name": " ", "volume": 2 }
            ]
        }"#
    }

    #[test]
    fn test_load_collects_rejections() {
        let scenario: Scenario = serde_json::from_str(scenario_json()).unwrap();
        assert_eq!(scenario.effective_config().duplicate_policy, DuplicatePolicy::Collapse);

        let outcome = scenario.load(scenario.effective_config());

        assert_eq!(outcome.planner.containers().len(), 1);
        assert_eq!(outcome.planner.queue().len(), 1);
        assert_eq!(outcome.collapsed, vec!["TV".to_string()]);

        let subjects: Vec<(RejectedSubject, &str)> = outcome
            .rejections
            .iter()
            .map(|r| (r.subject, r.label.as_str()))
            .collect();
        assert_eq!(
            subjects,
            vec![
                (RejectedSubject::Container, "Broken"),
                (RejectedSubject::Item, "Elephant"),
                (RejectedSubject::Item, " "),
            ]
        );
        assert!(matches!(outcome.rejections[1].reason, PackError::Unplaceable { .. }));
        assert!(matches!(outcome.rejections[2].reason, PackError::InvalidName(_)));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let scenario: Scenario = serde_json::from_str("{}").unwrap();
        let outcome = scenario.load(scenario.effective_config());
        assert!(outcome.planner.containers().is_empty());
        assert!(outcome.rejections.is_empty());
    }
}
