//! Attractions repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::attraction::{
        Attraction, AttractionQuery, AttractionRow, CreateAttraction, UpdateAttraction,
    },
};

/// Shared column list: joins region/category names and recomputes the
/// approved-review rating on every read (no denormalized rating column).
const ATTRACTION_COLUMNS: &str = r#"
    a.id, a.name, a.region_id, a.category_id,
    rg.name as region_name, c.name as category_name,
    a.description, a.image, a.latitude, a.longitude,
    a.visitors_count, a.status, a.entrance_fee, a.best_time,
    COALESCE((
        SELECT ROUND(AVG(r.rating)::numeric, 1)
        FROM reviews r
        WHERE r.attraction_id = a.id AND r.status = 'approved'
    ), 0)::float8 as rating,
    (SELECT COUNT(*) FROM reviews r WHERE r.attraction_id = a.id) as reviews_count,
    a.created_at
"#;

const ATTRACTION_FROM: &str = r#"
    FROM attractions a
    JOIN regions rg ON a.region_id = rg.id
    JOIN categories c ON a.category_id = c.id
"#;

#[derive(Clone)]
pub struct AttractionsRepository {
    pool: Pool<Postgres>,
}

impl AttractionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Search attractions with filters and pagination.
    ///
    /// Non-staff callers only ever see active attractions; staff see all
    /// statuses and may filter by status. Newest first, id as tiebreak.
    pub async fn search(
        &self,
        include_drafts: bool,
        query: &AttractionQuery,
    ) -> AppResult<(Vec<Attraction>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;

        let mut conditions = vec!["1=1".to_string()];
        let mut params: Vec<String> = Vec::new();

        if !include_drafts {
            conditions.push("a.status = 'active'".to_string());
        } else if let Some(ref status) = query.status {
            params.push(status.clone());
            conditions.push(format!("a.status = ${}", params.len()));
        }

        if let Some(ref region) = query.region {
            params.push(format!("%{}%", region));
            conditions.push(format!("rg.name ILIKE ${}", params.len()));
        }

        if let Some(ref category) = query.category {
            params.push(format!("%{}%", category));
            conditions.push(format!("c.name ILIKE ${}", params.len()));
        }

        if let Some(ref search) = query.search {
            params.push(format!("%{}%", search));
            conditions.push(format!(
                "(a.name ILIKE ${n} OR a.description ILIKE ${n})",
                n = params.len()
            ));
        }

        let where_clause = conditions.join(" AND ");

        let count_query = format!(
            "SELECT COUNT(*) {} WHERE {}",
            ATTRACTION_FROM, where_clause
        );
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        for p in &params {
            count = count.bind(p);
        }
        let total = count.fetch_one(&self.pool).await?;

        let select_query = format!(
            "SELECT {} {} WHERE {} ORDER BY a.created_at DESC, a.id DESC LIMIT {} OFFSET {}",
            ATTRACTION_COLUMNS, ATTRACTION_FROM, where_clause, per_page, offset
        );
        let mut select = sqlx::query_as::<_, AttractionRow>(&select_query);
        for p in &params {
            select = select.bind(p);
        }
        let rows = select.fetch_all(&self.pool).await?;

        Ok((rows.into_iter().map(Attraction::from).collect(), total))
    }

    /// Get attraction by ID. Draft attractions are only reachable when
    /// `include_drafts` is set (staff callers).
    pub async fn get_by_id(&self, id: i32, include_drafts: bool) -> AppResult<Attraction> {
        let status_clause = if include_drafts {
            ""
        } else {
            " AND a.status = 'active'"
        };
        let query = format!(
            "SELECT {} {} WHERE a.id = $1{}",
            ATTRACTION_COLUMNS, ATTRACTION_FROM, status_clause
        );
        let row = sqlx::query_as::<_, AttractionRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Attraction with id {} not found", id)))?;
        Ok(row.into())
    }

    /// Create a new attraction
    pub async fn create(&self, attraction: &CreateAttraction) -> AppResult<Attraction> {
        let status = attraction
            .status
            .map(|s| s.as_str())
            .unwrap_or("draft");
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO attractions
                (name, region_id, category_id, description, image,
                 latitude, longitude, status, entrance_fee, best_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&attraction.name)
        .bind(attraction.region_id)
        .bind(attraction.category_id)
        .bind(&attraction.description)
        .bind(&attraction.image)
        .bind(attraction.latitude)
        .bind(attraction.longitude)
        .bind(status)
        .bind(&attraction.entrance_fee)
        .bind(&attraction.best_time)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id, true).await
    }

    /// Update an attraction; absent fields are left unchanged
    pub async fn update(&self, id: i32, update: &UpdateAttraction) -> AppResult<Attraction> {
        let result = sqlx::query(
            r#"
            UPDATE attractions SET
                name = COALESCE($2, name),
                region_id = COALESCE($3, region_id),
                category_id = COALESCE($4, category_id),
                description = COALESCE($5, description),
                image = COALESCE($6, image),
                latitude = COALESCE($7, latitude),
                longitude = COALESCE($8, longitude),
                visitors_count = COALESCE($9, visitors_count),
                status = COALESCE($10, status),
                entrance_fee = COALESCE($11, entrance_fee),
                best_time = COALESCE($12, best_time)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(update.region_id)
        .bind(update.category_id)
        .bind(&update.description)
        .bind(&update.image)
        .bind(update.latitude)
        .bind(update.longitude)
        .bind(update.visitors_count)
        .bind(update.status.map(|s| s.as_str()))
        .bind(&update.entrance_fee)
        .bind(&update.best_time)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Attraction with id {} not found",
                id
            )));
        }

        self.get_by_id(id, true).await
    }

    /// Delete an attraction (reviews and favorites cascade)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM attractions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Attraction with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Toggle an attraction in the user's favorites. Returns true when the
    /// attraction was added, false when it was removed.
    pub async fn toggle_favorite(&self, attraction_id: i32, user_id: i32) -> AppResult<bool> {
        let removed = sqlx::query(
            "DELETE FROM attraction_favorites WHERE attraction_id = $1 AND user_id = $2",
        )
        .bind(attraction_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if removed.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            r#"
            INSERT INTO attraction_favorites (attraction_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(attraction_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(true)
    }

    /// List a user's favorite attractions, newest favorites first
    pub async fn favorites_for_user(&self, user_id: i32) -> AppResult<Vec<Attraction>> {
        let query = format!(
            r#"
            SELECT {} {}
            JOIN attraction_favorites f ON f.attraction_id = a.id
            WHERE f.user_id = $1
            ORDER BY f.created_at DESC, a.id DESC
            "#,
            ATTRACTION_COLUMNS, ATTRACTION_FROM
        );
        let rows = sqlx::query_as::<_, AttractionRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Attraction::from).collect())
    }

    /// Case-insensitive substring search over name, description and region
    /// name, for the recommendation matcher. Storage (id) order, bounded.
    pub async fn search_snippets(&self, term: &str, limit: i64) -> AppResult<Vec<Attraction>> {
        let query = format!(
            r#"
            SELECT {} {}
            WHERE a.status = 'active'
              AND (a.name ILIKE $1 OR a.description ILIKE $1 OR rg.name ILIKE $1)
            ORDER BY a.id
            LIMIT $2
            "#,
            ATTRACTION_COLUMNS, ATTRACTION_FROM
        );
        let rows = sqlx::query_as::<_, AttractionRow>(&query)
            .bind(format!("%{}%", term))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Attraction::from).collect())
    }

    /// Count all attractions
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attractions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Top attractions by visitor count, for the admin dashboard
    pub async fn most_visited(&self, limit: i64) -> AppResult<Vec<(String, i32)>> {
        let rows: Vec<(String, i32)> = sqlx::query_as(
            "SELECT name, visitors_count FROM attractions ORDER BY visitors_count DESC, id LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
