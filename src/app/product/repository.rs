//! 产品存储适配器接口

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Product;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sku {0} already exists")]
    DuplicateSku(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// 产品存储接口
///
/// 只要求单行原子性；并发 sku 冲突由实现方的唯一约束裁决。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 不存在则插入，存在则按 id 覆盖 name/price。sku 一经写入不再修改。
    async fn save(&self, product: &Product) -> Result<Product, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    /// 返回是否真的删除了一行；目标不存在不是错误。
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    /// 后端名称，用于健康检查输出
    fn backend(&self) -> &'static str;
}
