use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::category::{CategoryResponse, CreateCategoryRequest},
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/categorias",
    responses(
        (status = 200, description = "List all categories", body = Vec<CategoryResponse>)
    ),
    tag = "categories"
)]
pub async fn list_categories(State(db): State<Database>) -> WebResult<Response> {
    let categories = services::list_categories(db.pool()).await?;

    let response: Vec<CategoryResponse> =
        categories.into_iter().map(CategoryResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/categorias",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 303, description = "Name already registered"),
        (status = 400, description = "Validation error")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(db): State<Database>,
    Json(req): Json<CreateCategoryRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let category = services::create_category(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response())
}
