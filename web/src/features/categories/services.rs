use sqlx::SqlitePool;
use storage::{
    dto::category::CreateCategoryRequest, error::Result, models::Category,
    repository::category::CategoryRepository,
};

/// List all categories
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>> {
    let repo = CategoryRepository::new(pool);
    repo.list().await
}

/// Create a new category
pub async fn create_category(pool: &SqlitePool, request: &CreateCategoryRequest) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.create(request).await
}
