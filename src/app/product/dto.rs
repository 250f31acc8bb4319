//! 产品传输对象

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::model::Product;

/// HTTP 边界上的产品表示，输入输出共用。
///
/// 创建时不能带 `id`；更新时 body 中的 `id` 被路径参数取代；
/// 输出时 `missingLetter` 总是根据名称计算填充。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be bigger than zero"))]
    pub price: f64,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub sku: Option<String>,

    #[serde(default)]
    pub missing_letter: Option<String>,
}

impl ProductDto {
    /// 不带 id 的请求体，用于创建
    pub fn new(name: impl Into<String>, price: f64, sku: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            sku: Some(sku.into()),
            missing_letter: None,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let missing_letter = product.missing_letter().map(String::from);
        Self {
            id: Some(product.id),
            name: product.name,
            price: product.price,
            sku: Some(product.sku),
            missing_letter,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from("must not be blank"));
        return Err(error);
    }
    Ok(())
}
