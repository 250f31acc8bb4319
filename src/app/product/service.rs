//! 产品业务服务

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use super::{dto::ProductDto, model::Product, repository::ProductRepository};
use crate::core::error::CoreError;

/// 删除成功后返回给调用方的确认文本
pub const DELETE_CONFIRMATION: &str = "Product deleted successfully";

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, input: ProductDto) -> Result<Product, CoreError> {
        if input.id.is_some() {
            return Err(CoreError::BadRequest(
                "id must be absent when creating a product".to_string(),
            ));
        }
        input.validate()?;
        let sku = input
            .sku
            .ok_or_else(|| CoreError::BadRequest("sku: is required".to_string()))?;

        let product = self
            .repository
            .save(&Product::new(input.name, input.price, sku))
            .await?;

        info!("Created product: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// 更新已存在的产品。id 不存在时返回 NotFound，不会以该 id 新建记录。
    pub async fn update(&self, id: Uuid, input: ProductDto) -> Result<Product, CoreError> {
        input.validate()?;
        let mut product = self.get_by_id(id).await?;

        if let Some(sku) = input.sku.as_deref() {
            if sku != product.sku {
                debug!(
                    "Ignoring sku change for product {}: {} -> {}",
                    id, product.sku, sku
                );
            }
        }
        product.name = input.name;
        product.price = input.price;

        let product = self.repository.save(&product).await?;

        info!("Updated product: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Product, CoreError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Product {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<&'static str, CoreError> {
        if self.repository.delete_by_id(id).await? {
            info!("Deleted product: {}", id);
        } else {
            debug!("Delete of absent product {} ignored", id);
        }
        Ok(DELETE_CONFIRMATION)
    }

    pub async fn ping(&self) -> Result<&'static str, CoreError> {
        self.repository.ping().await?;
        Ok(self.repository.backend())
    }
}
