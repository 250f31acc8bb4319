//! 产品处理器

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use super::dto::ProductDto;
use crate::app::AppState;
use crate::core::{error::CoreError, extract::ValidatedJson};

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductDto>,
) -> Result<(StatusCode, Json<ProductDto>), CoreError> {
    let product = state.product_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PUT /products/:id，body 中的 id 以路径为准
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    ValidatedJson(payload): ValidatedJson<ProductDto>,
) -> Result<Json<ProductDto>, CoreError> {
    let Path(id) = path?;
    let product = state.product_service.update(id, payload).await?;
    Ok(Json(product.into()))
}

/// DELETE /products/:id，返回纯文本确认
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<&'static str, CoreError> {
    let Path(id) = path?;
    state.product_service.delete(id).await
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductDto>>, CoreError> {
    let products = state.product_service.get_all().await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ProductDto>, CoreError> {
    let Path(id) = path?;
    let product = state.product_service.get_by_id(id).await?;
    Ok(Json(product.into()))
}
