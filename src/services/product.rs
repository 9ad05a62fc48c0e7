//! Product services - CRUD sui prodotti

use crate::core::{AppError, AppState};
use crate::dtos::{CreateProductDTO, UpdateProductDTO};
use crate::entities::Product;
use crate::repositories::{Create, Delete, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.product.read_all().await?;
    info!("Returning {} products", products.len());
    Ok(Json(products))
}

#[instrument(skip(state), fields(product_id = %product_id))]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i32>,
) -> Result<Json<Product>, AppError> {
    state
        .product
        .read(&product_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            warn!("Product not found");
            AppError::not_found("Product not found")
        })
}

#[instrument(skip(state, body), fields(name = %body.name, category_id = %body.category_id))]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateProductDTO>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    // price non negativo e categoryId esistente non vengono verificati
    let created = state.product.create(&body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(state, body), fields(product_id = %product_id))]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i32>,
    Json(body): Json<UpdateProductDTO>,
) -> Result<Json<Product>, AppError> {
    let updated = state.product.update(&product_id, &body).await?;
    Ok(Json(updated))
}

#[instrument(skip(state), fields(product_id = %product_id))]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.product.delete(&product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
