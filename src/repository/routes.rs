//! Routes repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::route::{CreateRoute, CreateRouteStop, Route, RouteDetails, RouteStop, UpdateRoute},
};

#[derive(Clone)]
pub struct RoutesRepository {
    pool: Pool<Postgres>,
}

impl RoutesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all routes with their ordered stops
    pub async fn list(&self) -> AppResult<Vec<RouteDetails>> {
        let routes = sqlx::query_as::<_, Route>(
            "SELECT id, title, description, duration_days, budget_range, difficulty, distance_km, image FROM routes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let stops = sqlx::query_as::<_, RouteStop>(
            "SELECT id, route_id, day_number, title, description, image, duration_label FROM route_stops ORDER BY day_number, id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut details: Vec<RouteDetails> = routes
            .into_iter()
            .map(|route| RouteDetails {
                route,
                stops: Vec::new(),
            })
            .collect();
        for stop in stops {
            if let Some(d) = details.iter_mut().find(|d| d.route.id == stop.route_id) {
                d.stops.push(stop);
            }
        }
        Ok(details)
    }

    /// Get a route with its stops sorted by day number
    pub async fn get_by_id(&self, id: i32) -> AppResult<RouteDetails> {
        let route = sqlx::query_as::<_, Route>(
            "SELECT id, title, description, duration_days, budget_range, difficulty, distance_km, image FROM routes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Route with id {} not found", id)))?;

        let stops = sqlx::query_as::<_, RouteStop>(
            "SELECT id, route_id, day_number, title, description, image, duration_label FROM route_stops WHERE route_id = $1 ORDER BY day_number, id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(RouteDetails { route, stops })
    }

    /// Create a new route
    pub async fn create(&self, route: &CreateRoute) -> AppResult<RouteDetails> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO routes (title, description, duration_days, budget_range, difficulty, distance_km, image)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&route.title)
        .bind(&route.description)
        .bind(route.duration_days)
        .bind(&route.budget_range)
        .bind(&route.difficulty)
        .bind(route.distance_km)
        .bind(&route.image)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a route; absent fields are left unchanged
    pub async fn update(&self, id: i32, update: &UpdateRoute) -> AppResult<RouteDetails> {
        let result = sqlx::query(
            r#"
            UPDATE routes SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                duration_days = COALESCE($4, duration_days),
                budget_range = COALESCE($5, budget_range),
                difficulty = COALESCE($6, difficulty),
                distance_km = COALESCE($7, distance_km),
                image = COALESCE($8, image)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.duration_days)
        .bind(&update.budget_range)
        .bind(&update.difficulty)
        .bind(update.distance_km)
        .bind(&update.image)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Route with id {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Delete a route (stops cascade)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Route with id {} not found", id)));
        }
        Ok(())
    }

    /// Add a stop to a route
    pub async fn create_stop(&self, route_id: i32, stop: &CreateRouteStop) -> AppResult<RouteStop> {
        // Verify the route exists first for a clean 404
        self.get_by_id(route_id).await?;

        let created = sqlx::query_as::<_, RouteStop>(
            r#"
            INSERT INTO route_stops (route_id, day_number, title, description, image, duration_label)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, route_id, day_number, title, description, image, duration_label
            "#,
        )
        .bind(route_id)
        .bind(stop.day_number)
        .bind(&stop.title)
        .bind(&stop.description)
        .bind(&stop.image)
        .bind(stop.duration_label.as_deref().unwrap_or("Full Day"))
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Delete a route stop
    pub async fn delete_stop(&self, stop_id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM route_stops WHERE id = $1")
            .bind(stop_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Route stop with id {} not found",
                stop_id
            )));
        }
        Ok(())
    }
}
