//! Repository layer for database operations

pub mod attractions;
pub mod bookings;
pub mod reviews;
pub mod routes;
pub mod taxonomy;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub taxonomy: taxonomy::TaxonomyRepository,
    pub attractions: attractions::AttractionsRepository,
    pub reviews: reviews::ReviewsRepository,
    pub routes: routes::RoutesRepository,
    pub bookings: bookings::BookingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            taxonomy: taxonomy::TaxonomyRepository::new(pool.clone()),
            attractions: attractions::AttractionsRepository::new(pool.clone()),
            reviews: reviews::ReviewsRepository::new(pool.clone()),
            routes: routes::RoutesRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            pool,
        }
    }
}
