use sqlx::SqlitePool;
use storage::{
    dto::athlete::{AthleteFilter, AthleteSummary, CreateAthleteRequest},
    error::Result,
    models::{Athlete, Category, TrainingCenter},
    repository::{
        athlete::AthleteRepository, category::CategoryRepository,
        training_center::TrainingCenterRepository,
    },
};

/// List athletes matching the filter, relation names resolved
pub async fn list_athletes(
    pool: &SqlitePool,
    filter: &AthleteFilter,
) -> Result<Vec<AthleteSummary>> {
    let repo = AthleteRepository::new(pool);
    repo.list(filter).await
}

/// Create a new athlete and resolve its relations
pub async fn create_athlete(
    pool: &SqlitePool,
    request: &CreateAthleteRequest,
) -> Result<(Athlete, TrainingCenter, Category)> {
    let athlete = AthleteRepository::new(pool).create(request).await?;

    let center = TrainingCenterRepository::new(pool)
        .find_by_id(athlete.training_center_id)
        .await?;
    let category = CategoryRepository::new(pool)
        .find_by_id(athlete.category_id)
        .await?;

    Ok((athlete, center, category))
}
