use sqlx::SqlitePool;

use crate::dto::category::CreateCategoryRequest;
use crate::error::{Result, StorageError, map_unique_violation};
use crate::models::Category;

pub struct CategoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT category_id, name FROM categories ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Find category by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT category_id, name FROM categories WHERE category_id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    /// Create a new category
    pub async fn create(&self, req: &CreateCategoryRequest) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES (?) RETURNING category_id, name",
        )
        .bind(&req.name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |message| {
                StorageError::ConstraintViolation(message.to_string())
            })
        })?;

        Ok(category)
    }
}
