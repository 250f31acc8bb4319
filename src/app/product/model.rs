//! 产品数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 持久化的产品实体，对应 `products` 表的一行。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub sku: String,
}

impl Product {
    /// 创建新产品，id 在此时随机生成
    pub fn new(name: String, price: f64, sku: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            sku,
        }
    }

    /// 名称中按 a-z 顺序第一个未出现的字母（不区分大小写）。
    ///
    /// 名称为空白或 26 个字母全部出现时返回 `None`。
    pub fn missing_letter(&self) -> Option<char> {
        if self.name.trim().is_empty() {
            return None;
        }

        let mut alphabet = [false; 26];
        for c in self.name.to_lowercase().chars() {
            if c.is_ascii_lowercase() {
                alphabet[(c as u8 - b'a') as usize] = true;
            }
        }

        alphabet
            .iter()
            .position(|present| !present)
            .map(|i| (b'a' + i as u8) as char)
    }
}
