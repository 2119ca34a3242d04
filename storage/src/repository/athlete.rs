use sqlx::SqlitePool;

use crate::dto::athlete::{AthleteFilter, AthleteSummary, CreateAthleteRequest};
use crate::error::{Result, StorageError, map_unique_violation};
use crate::models::Athlete;

/// Engine marker for the identity-code uniqueness constraint.
const IDENTITY_CODE_CONSTRAINT: &str = "athletes.identity_code";

pub struct AthleteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List athletes with their relation names resolved, applying the
    /// optional filters. Returns the full filtered set; windowing happens
    /// on the materialized list.
    pub async fn list(&self, filter: &AthleteFilter) -> Result<Vec<AthleteSummary>> {
        let name_pattern = filter.name.as_ref().map(|name| format!("%{name}%"));

        let athletes = sqlx::query_as::<_, AthleteSummary>(
            r#"
            SELECT a.athlete_id, a.name, a.identity_code,
                   tc.name AS training_center, c.name AS category
            FROM athletes a
            JOIN training_centers tc ON a.training_center_id = tc.training_center_id
            JOIN categories c ON a.category_id = c.category_id
            WHERE (?1 IS NULL OR a.name LIKE ?1)
              AND (?2 IS NULL OR a.identity_code = ?2)
            ORDER BY a.athlete_id
            "#,
        )
        .bind(name_pattern)
        .bind(filter.identity_code.as_deref())
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Create a new athlete
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (name, identity_code, training_center_id, category_id)
            VALUES (?, ?, ?, ?)
            RETURNING athlete_id, name, identity_code, training_center_id, category_id
            "#,
        )
        .bind(&req.name)
        .bind(&req.identity_code)
        .bind(req.training_center_id)
        .bind(req.category_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |message| {
                if message.contains(IDENTITY_CODE_CONSTRAINT) {
                    StorageError::DuplicateIdentityCode(req.identity_code.clone())
                } else {
                    StorageError::ConstraintViolation(message.to_string())
                }
            })
        })?;

        Ok(athlete)
    }
}
