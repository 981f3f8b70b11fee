//! Route management service

use crate::{
    error::AppResult,
    models::{
        route::{CreateRoute, CreateRouteStop, RouteDetails, RouteStop, UpdateRoute},
        user::Caller,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct RoutesService {
    repository: Repository,
}

impl RoutesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all routes with their stops (stops always ordered by day)
    pub async fn list(&self) -> AppResult<Vec<RouteDetails>> {
        self.repository.routes.list().await
    }

    /// Get a route with its ordered stops
    pub async fn get(&self, id: i32) -> AppResult<RouteDetails> {
        self.repository.routes.get_by_id(id).await
    }

    /// Create a route (staff only)
    pub async fn create(&self, caller: &Caller, route: &CreateRoute) -> AppResult<RouteDetails> {
        caller.require_staff()?;
        self.repository.routes.create(route).await
    }

    /// Update a route (staff only)
    pub async fn update(
        &self,
        caller: &Caller,
        id: i32,
        update: &UpdateRoute,
    ) -> AppResult<RouteDetails> {
        caller.require_staff()?;
        self.repository.routes.update(id, update).await
    }

    /// Delete a route and its stops (staff only)
    pub async fn delete(&self, caller: &Caller, id: i32) -> AppResult<()> {
        caller.require_staff()?;
        self.repository.routes.delete(id).await
    }

    /// Add a stop to a route (staff only)
    pub async fn create_stop(
        &self,
        caller: &Caller,
        route_id: i32,
        stop: &CreateRouteStop,
    ) -> AppResult<RouteStop> {
        caller.require_staff()?;
        self.repository.routes.create_stop(route_id, stop).await
    }

    /// Delete a route stop (staff only)
    pub async fn delete_stop(&self, caller: &Caller, stop_id: i32) -> AppResult<()> {
        caller.require_staff()?;
        self.repository.routes.delete_stop(stop_id).await
    }
}
