// ==========================================
// 装箱排产系统 - 物品领域模型
// ==========================================
// 红线: 物品创建后不可变，非法物品不得进入任何集合
// ==========================================

use crate::error::{PackError, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

// ==========================================
// Item - 待装物品
// ==========================================
// 排序: 体积降序 → 名称升序（码点序）
// 相等: 排序比较结果为 Equal 即视为同一队列键
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    name: String,
    volume: f64,
}

impl Item {
    /// 创建物品
    ///
    /// # 参数
    /// - `name`: 物品名称（不可为空白）
    /// - `volume`: 体积（有限正数）
    ///
    /// # 返回
    /// - `Err(InvalidDimension)`: 体积非正或非有限数
    /// - `Err(InvalidName)`: 名称为空白
    pub fn new(name: impl Into<String>, volume: f64) -> Result<Self> {
        let name = name.into();

        if !volume.is_finite() || volume <= 0.0 {
            return Err(PackError::InvalidDimension {
                subject: format!("item '{}' volume", name),
                value: volume,
            });
        }
        if name.trim().is_empty() {
            return Err(PackError::InvalidName("item name".to_string()));
        }

        Ok(Self { name, volume })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// 队列优先级比较（Less 表示优先级更高）
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        other
            .volume
            .total_cmp(&self.volume)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.priority_cmp(other) == Ordering::Equal
    }
}

impl Eq for Item {}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority_cmp(other)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.volume)
    }
}
