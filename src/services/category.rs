//! Category services - CRUD sulle categorie

use crate::core::{AppError, AppState};
use crate::dtos::{CreateCategoryDTO, UpdateCategoryDTO};
use crate::entities::Category;
use crate::repositories::{Create, Delete, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.category.read_all().await?;
    info!("Returning {} categories", categories.len());
    Ok(Json(categories))
}

#[instrument(skip(state), fields(category_id = %category_id))]
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>, // parametro dalla URL /api/categories/{id}
) -> Result<Json<Category>, AppError> {
    state
        .category
        .read(&category_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            warn!("Category not found");
            AppError::not_found("Category not found")
        })
}

#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateCategoryDTO>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let created = state.category.create(&body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(state, body), fields(category_id = %category_id))]
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
    Json(body): Json<UpdateCategoryDTO>,
) -> Result<Json<Category>, AppError> {
    let updated = state.category.update(&category_id, &body).await?;
    Ok(Json(updated))
}

#[instrument(skip(state), fields(category_id = %category_id))]
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    // TODO: scegliere tra restrict e cascade quando sarà decisa la policy per le categorie
    // che hanno ancora prodotti; oggi i prodotti restano con un categoryId orfano
    state.category.delete(&category_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
