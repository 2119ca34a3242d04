use sqlx::SqlitePool;

use crate::dto::training_center::CreateTrainingCenterRequest;
use crate::error::{Result, StorageError, map_unique_violation};
use crate::models::TrainingCenter;

pub struct TrainingCenterRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all training centers
    pub async fn list(&self) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            "SELECT training_center_id, name FROM training_centers ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(centers)
    }

    /// Find training center by ID
    pub async fn find_by_id(&self, id: i64) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "SELECT training_center_id, name FROM training_centers WHERE training_center_id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(center)
    }

    /// Create a new training center
    pub async fn create(&self, req: &CreateTrainingCenterRequest) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "INSERT INTO training_centers (name) VALUES (?) RETURNING training_center_id, name",
        )
        .bind(&req.name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |message| {
                StorageError::ConstraintViolation(message.to_string())
            })
        })?;

        Ok(center)
    }
}
