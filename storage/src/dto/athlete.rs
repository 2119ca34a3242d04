use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::dto::category::CategoryResponse;
use crate::dto::training_center::TrainingCenterResponse;
use crate::models::{Athlete, Category, TrainingCenter};

/// Request payload for registering a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_identity_code"))]
    pub identity_code: String,

    pub training_center_id: i64,

    pub category_id: i64,
}

/// Full athlete record with its relations resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: i64,
    pub name: String,
    pub identity_code: String,
    pub training_center: TrainingCenterResponse,
    pub category: CategoryResponse,
}

impl From<(Athlete, TrainingCenter, Category)> for AthleteResponse {
    fn from((athlete, center, category): (Athlete, TrainingCenter, Category)) -> Self {
        Self {
            id: athlete.athlete_id,
            name: athlete.name,
            identity_code: athlete.identity_code,
            training_center: TrainingCenterResponse::from(center),
            category: CategoryResponse::from(category),
        }
    }
}

/// Optional listing filters, independently combinable
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct AthleteFilter {
    /// Case-insensitive substring match on the athlete name
    pub name: Option<String>,
    /// Exact match on the identity code
    pub identity_code: Option<String>,
}

/// Athlete row joined with the names of its relations
#[derive(Debug, Clone, FromRow)]
pub struct AthleteSummary {
    pub athlete_id: i64,
    pub name: String,
    pub identity_code: String,
    pub training_center: String,
    pub category: String,
}

/// Reduced listing shape: names only, no identifiers
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteListItem {
    pub name: String,
    pub training_center: String,
    pub category: String,
}

impl From<AthleteSummary> for AthleteListItem {
    fn from(summary: AthleteSummary) -> Self {
        Self {
            name: summary.name,
            training_center: summary.training_center,
            category: summary.category,
        }
    }
}

// Validation helper: NNN.NNN.NNN-NN
fn validate_identity_code(code: &str) -> Result<(), validator::ValidationError> {
    let bytes = code.as_bytes();

    let well_formed = bytes.len() == 14
        && bytes.iter().enumerate().all(|(i, b)| match i {
            3 | 7 => *b == b'.',
            11 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if well_formed {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_identity_code"))
    }
}
