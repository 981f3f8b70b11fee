//! Business logic services

pub mod assistant;
pub mod bookings;
pub mod catalog;
pub mod reviews;
pub mod routes;
pub mod stats;
pub mod users;

use std::sync::Arc;

use crate::{
    config::{AuthConfig, BookingsConfig},
    repository::Repository,
};

use assistant::TextCompletionProvider;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub catalog: catalog::CatalogService,
    pub reviews: reviews::ReviewsService,
    pub routes: routes::RoutesService,
    pub bookings: bookings::BookingsService,
    pub assistant: assistant::AssistantService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        bookings_config: BookingsConfig,
        provider: Arc<dyn TextCompletionProvider>,
    ) -> Self {
        Self {
            users: users::UsersService::new(repository.clone(), auth_config),
            catalog: catalog::CatalogService::new(repository.clone()),
            reviews: reviews::ReviewsService::new(repository.clone()),
            routes: routes::RoutesService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone(), bookings_config),
            assistant: assistant::AssistantService::new(repository.clone(), provider),
            stats: stats::StatsService::new(repository),
        }
    }
}
