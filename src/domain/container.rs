// ==========================================
// 装箱排产系统 - 箱子领域模型
// ==========================================
// 红线: current_volume <= capacity，仅通过 try_place 门控保证
// 用途: 容量受限的物品累加器，物品只追加不移除
// ==========================================

use crate::domain::item::Item;
use crate::error::{PackError, Result};
use std::fmt;

// ==========================================
// Container - 箱子
// ==========================================
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    capacity: f64,
    packed_items: Vec<Item>, // 追加顺序 = 装入顺序
}

impl Container {
    /// 创建箱子
    ///
    /// # 参数
    /// - `id`: 箱子编号（不可为空白，不要求唯一）
    /// - `capacity`: 容量（有限正数，创建后不可变）
    pub fn new(id: impl Into<String>, capacity: f64) -> Result<Self> {
        let id = id.into();

        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(PackError::InvalidDimension {
                subject: format!("container '{}' capacity", id),
                value: capacity,
            });
        }
        if id.trim().is_empty() {
            return Err(PackError::InvalidName("container id".to_string()));
        }

        Ok(Self {
            id,
            capacity,
            packed_items: Vec::new(),
        })
    }

    // ==========================================
    // 装箱门控
    // ==========================================

    /// 尝试装入物品
    ///
    /// # 返回
    /// - `Ok(())`: 已装入
    /// - `Err(item)`: 剩余空间不足，物品原样退回，箱子无变化
    ///
    /// 门控与 `current_volume` 做同一次累加（已装总和 + 新体积），
    /// 装入后的总和必然不超过容量
    pub fn try_place(&mut self, item: Item) -> std::result::Result<(), Item> {
        if self.current_volume() + item.volume() <= self.capacity {
            self.packed_items.push(item);
            Ok(())
        } else {
            Err(item)
        }
    }

    // ==========================================
    // 派生量（每次从 packed_items 重新计算）
    // ==========================================

    pub fn current_volume(&self) -> f64 {
        self.packed_items.iter().map(Item::volume).sum()
    }

    pub fn remaining_space(&self) -> f64 {
        self.capacity - self.current_volume()
    }

    /// 填充率（0 - 100）
    pub fn fill_percentage(&self) -> f64 {
        self.current_volume() / self.capacity * 100.0
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn packed_items(&self) -> &[Item] {
        &self.packed_items
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Container '{}' ({:.2} / {:.2}) - fill: {:.1}%",
            self.id,
            self.current_volume(),
            self.capacity,
            self.fill_percentage()
        )
    }
}
