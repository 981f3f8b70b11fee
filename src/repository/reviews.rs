//! Reviews repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::review::{ModerationDecision, Review, ReviewRow, ReviewScope},
};

const REVIEW_COLUMNS: &str = r#"
    r.id, r.author_id, u.username as author_name,
    r.attraction_id, a.name as attraction_name,
    r.rating, r.text, r.status, r.rejection_reason, r.created_at
"#;

const REVIEW_FROM: &str = r#"
    FROM reviews r
    JOIN users u ON r.author_id = u.id
    JOIN attractions a ON r.attraction_id = a.id
"#;

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: Pool<Postgres>,
}

impl ReviewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get review by ID, regardless of status
    pub async fn get_by_id(&self, id: i32) -> AppResult<Review> {
        let query = format!("SELECT {} {} WHERE r.id = $1", REVIEW_COLUMNS, REVIEW_FROM);
        let row = sqlx::query_as::<_, ReviewRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review with id {} not found", id)))?;
        Ok(row.into())
    }

    /// List reviews visible under the given scope, newest first
    pub async fn list(
        &self,
        scope: ReviewScope,
        attraction_id: Option<i32>,
    ) -> AppResult<Vec<Review>> {
        let mut conditions = vec!["1=1".to_string()];
        let mut bind_author = None;
        let mut next_param = 1;

        if attraction_id.is_some() {
            conditions.push(format!("r.attraction_id = ${}", next_param));
            next_param += 1;
        }

        match scope {
            ReviewScope::All => {}
            ReviewScope::ApprovedOrOwn(author_id) => {
                bind_author = Some(author_id);
                conditions.push(format!(
                    "(r.status = 'approved' OR r.author_id = ${})",
                    next_param
                ));
            }
            ReviewScope::ApprovedOnly => {
                conditions.push("r.status = 'approved'".to_string());
            }
        }

        let query = format!(
            "SELECT {} {} WHERE {} ORDER BY r.created_at DESC, r.id DESC",
            REVIEW_COLUMNS,
            REVIEW_FROM,
            conditions.join(" AND ")
        );

        let mut select = sqlx::query_as::<_, ReviewRow>(&query);
        if let Some(id) = attraction_id {
            select = select.bind(id);
        }
        if let Some(author) = bind_author {
            select = select.bind(author);
        }
        let rows = select.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Review::from).collect())
    }

    /// Create a review. Status is always `pending` and the author is the
    /// caller; neither is accepted from input.
    pub async fn create(
        &self,
        author_id: i32,
        attraction_id: i32,
        rating: i16,
        text: &str,
    ) -> AppResult<Review> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO reviews (author_id, attraction_id, rating, text, status)
            VALUES ($1, $2, $3, $4, 'pending')
            RETURNING id
            "#,
        )
        .bind(author_id)
        .bind(attraction_id)
        .bind(rating)
        .bind(text)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Apply a moderation decision as one atomic conditional update.
    ///
    /// Rejection stores the supplied reason; approval clears any prior one.
    pub async fn moderate(
        &self,
        id: i32,
        decision: ModerationDecision,
        reason: Option<&str>,
    ) -> AppResult<Review> {
        let stored_reason = match decision {
            ModerationDecision::Rejected => Some(reason.unwrap_or("")),
            ModerationDecision::Approved => None,
        };

        let result = sqlx::query(
            "UPDATE reviews SET status = $2, rejection_reason = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(decision.as_str())
        .bind(stored_reason)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Review with id {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Count reviews awaiting moderation
    pub async fn count_pending(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
