use sqlx::SqlitePool;
use storage::{
    dto::training_center::CreateTrainingCenterRequest, error::Result, models::TrainingCenter,
    repository::training_center::TrainingCenterRepository,
};

/// List all training centers
pub async fn list_training_centers(pool: &SqlitePool) -> Result<Vec<TrainingCenter>> {
    let repo = TrainingCenterRepository::new(pool);
    repo.list().await
}

/// Create a new training center
pub async fn create_training_center(
    pool: &SqlitePool,
    request: &CreateTrainingCenterRequest,
) -> Result<TrainingCenter> {
    let repo = TrainingCenterRepository::new(pool);
    repo.create(request).await
}
