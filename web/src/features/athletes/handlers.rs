use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::athlete::{AthleteFilter, AthleteListItem, AthleteResponse, CreateAthleteRequest},
    dto::common::{LimitOffsetParams, Page},
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/atletas",
    params(AthleteFilter, LimitOffsetParams),
    responses(
        (status = 200, description = "One page of matching athletes", body = Page<AthleteListItem>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(db): State<Database>,
    Query(filter): Query<AthleteFilter>,
    Query(pagination): Query<LimitOffsetParams>,
) -> WebResult<Response> {
    let athletes = services::list_athletes(db.pool(), &filter).await?;

    let items: Vec<AthleteListItem> = athletes.into_iter().map(AthleteListItem::from).collect();

    Ok(Json(Page::paginate(items, pagination)).into_response())
}

#[utoipa::path(
    post,
    path = "/atletas",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 303, description = "Identity code already registered"),
        (status = 400, description = "Validation error")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(req): Json<CreateAthleteRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let (athlete, center, category) = services::create_athlete(db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(AthleteResponse::from((athlete, center, category))),
    )
        .into_response())
}
