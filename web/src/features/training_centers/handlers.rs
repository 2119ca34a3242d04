use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::training_center::{CreateTrainingCenterRequest, TrainingCenterResponse},
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/centros",
    responses(
        (status = 200, description = "List all training centers", body = Vec<TrainingCenterResponse>)
    ),
    tag = "training_centers"
)]
pub async fn list_training_centers(State(db): State<Database>) -> WebResult<Response> {
    let centers = services::list_training_centers(db.pool()).await?;

    let response: Vec<TrainingCenterResponse> = centers
        .into_iter()
        .map(TrainingCenterResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/centros",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created successfully", body = TrainingCenterResponse),
        (status = 303, description = "Name already registered"),
        (status = 400, description = "Validation error")
    ),
    tag = "training_centers"
)]
pub async fn create_training_center(
    State(db): State<Database>,
    Json(req): Json<CreateTrainingCenterRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let center = services::create_training_center(db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(TrainingCenterResponse::from(center)),
    )
        .into_response())
}
