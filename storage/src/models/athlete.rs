use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: i64,
    pub name: String,
    pub identity_code: String,
    pub training_center_id: i64,
    pub category_id: i64,
}
