use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::TrainingCenter;

/// Request payload for registering a training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingCenterRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

/// Response containing a stored training center
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingCenterResponse {
    pub id: i64,
    pub name: String,
}

impl From<TrainingCenter> for TrainingCenterResponse {
    fn from(center: TrainingCenter) -> Self {
        Self {
            id: center.training_center_id,
            name: center.name,
        }
    }
}
