//! Admin dashboard statistics service

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::Caller,
    repository::Repository,
};

/// A popular destination entry for the dashboard
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PopularDestination {
    pub name: String,
    pub visitors_count: i32,
}

/// Admin dashboard counters
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsResponse {
    pub total_users: i64,
    pub total_attractions: i64,
    pub pending_reviews: i64,
    pub popular_destinations: Vec<PopularDestination>,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get dashboard statistics (staff only)
    pub async fn get_stats(&self, caller: &Caller) -> AppResult<StatsResponse> {
        caller.require_staff()?;

        let total_users = self.repository.users.count().await?;
        let total_attractions = self.repository.attractions.count().await?;
        let pending_reviews = self.repository.reviews.count_pending().await?;
        let popular_destinations = self
            .repository
            .attractions
            .most_visited(5)
            .await?
            .into_iter()
            .map(|(name, visitors_count)| PopularDestination {
                name,
                visitors_count,
            })
            .collect();

        Ok(StatsResponse {
            total_users,
            total_attractions,
            pending_reviews,
            popular_destinations,
        })
    }
}
