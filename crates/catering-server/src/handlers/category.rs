//! Category management handlers

use axum::{extract::Path, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    db::category,
    error::{AppError, Result},
    models::category::{Category, CategoryCreate, CategoryUpdate},
};

/// Response for single-category operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub success: bool,
    pub data: Option<Category>,
    pub message: Option<String>,
}

/// Response for category listings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub data: Vec<Category>,
    pub total: usize,
}

/// List all categories
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Categories listed", body = CategoryListResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Category"
)]
pub async fn list_categories() -> Result<Json<CategoryListResponse>> {
    let categories = category::list_categories().await?;
    Ok(Json(CategoryListResponse {
        success: true,
        total: categories.len(),
        data: categories,
    }))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/",
    request_body = CategoryCreate,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Category"
)]
pub async fn create_category(
    Json(payload): Json<CategoryCreate>,
) -> Result<(StatusCode, Json<CategoryResponse>)> {
    payload.validate()?;

    let created = category::create_category(payload).await?;
    tracing::info!("Created category {} ({})", created.category_id, created.name);

    Ok((
        StatusCode::CREATED,
        Json(CategoryResponse {
            success: true,
            data: Some(created),
            message: Some("Category created successfully".to_string()),
        }),
    ))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/{category_id}",
    params(
        ("category_id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found"),
    ),
    tag = "Category"
)]
pub async fn get_category(Path(category_id): Path<i64>) -> Result<Json<CategoryResponse>> {
    let category = category::get_category_by_id(category_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {category_id}")))?;

    Ok(Json(CategoryResponse {
        success: true,
        data: Some(category),
        message: None,
    }))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/{category_id}",
    params(
        ("category_id" = i64, Path, description = "Category id")
    ),
    request_body = CategoryUpdate,
    responses(
        (status = 200, description = "Category updated successfully", body = CategoryResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Category not found"),
    ),
    tag = "Category"
)]
pub async fn update_category(
    Path(category_id): Path<i64>,
    Json(payload): Json<CategoryUpdate>,
) -> Result<Json<CategoryResponse>> {
    payload.validate()?;

    let updated = category::update_category(category_id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {category_id}")))?;
    tracing::info!("Updated category {category_id}");

    Ok(Json(CategoryResponse {
        success: true,
        data: Some(updated),
        message: Some("Category updated successfully".to_string()),
    }))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/{category_id}",
    params(
        ("category_id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category deleted successfully", body = CategoryResponse),
        (status = 404, description = "Category not found"),
    ),
    tag = "Category"
)]
pub async fn delete_category(Path(category_id): Path<i64>) -> Result<Json<CategoryResponse>> {
    category::delete_category(category_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {category_id}")))?;
    tracing::info!("Deleted category {category_id}");

    Ok(Json(CategoryResponse {
        success: true,
        data: None,
        message: Some("Category deleted successfully".to_string()),
    }))
}
