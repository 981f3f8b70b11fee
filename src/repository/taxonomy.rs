//! Regions and categories repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::taxonomy::{Category, Region},
};

#[derive(Clone)]
pub struct TaxonomyRepository {
    pool: Pool<Postgres>,
}

impl TaxonomyRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List regions ordered by name
    pub async fn list_regions(&self) -> AppResult<Vec<Region>> {
        let regions =
            sqlx::query_as::<_, Region>("SELECT id, name FROM regions ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(regions)
    }

    /// List categories ordered by name
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    /// Create a region (name is unique)
    pub async fn create_region(&self, name: &str) -> AppResult<Region> {
        sqlx::query_as::<_, Region>(
            "INSERT INTO regions (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(Self::map_unique("Region"))
    }

    /// Create a category (name is unique)
    pub async fn create_category(&self, name: &str) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(Self::map_unique("Category"))
    }

    /// Delete a region (cascades to its attractions)
    pub async fn delete_region(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM regions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Region with id {} not found", id)));
        }
        Ok(())
    }

    /// Delete a category (cascades to its attractions)
    pub async fn delete_category(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        }
        Ok(())
    }

    fn map_unique(entity: &'static str) -> impl Fn(sqlx::Error) -> AppError {
        move |e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(format!("{} with this name already exists", entity))
            }
            other => AppError::Database(other),
        }
    }
}
