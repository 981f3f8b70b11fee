//! Attraction catalogue service

use crate::{
    error::AppResult,
    models::{
        attraction::{Attraction, AttractionQuery, CreateAttraction, UpdateAttraction},
        taxonomy::{Category, Region},
        user::Caller,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List attractions visible to the caller. Staff see every status;
    /// everyone else only sees active entries.
    pub async fn list_attractions(
        &self,
        caller: &Caller,
        query: &AttractionQuery,
    ) -> AppResult<(Vec<Attraction>, i64)> {
        self.repository
            .attractions
            .search(caller.is_staff(), query)
            .await
    }

    /// Get one attraction, scoped by caller. A draft attraction is not
    /// found for non-staff callers rather than forbidden.
    pub async fn get_attraction(&self, caller: &Caller, id: i32) -> AppResult<Attraction> {
        self.repository
            .attractions
            .get_by_id(id, caller.is_staff())
            .await
    }

    /// Create an attraction (staff only)
    pub async fn create_attraction(
        &self,
        caller: &Caller,
        attraction: &CreateAttraction,
    ) -> AppResult<Attraction> {
        caller.require_staff()?;
        self.repository.attractions.create(attraction).await
    }

    /// Update an attraction (staff only); covers status changes and
    /// visitor-count adjustments
    pub async fn update_attraction(
        &self,
        caller: &Caller,
        id: i32,
        update: &UpdateAttraction,
    ) -> AppResult<Attraction> {
        caller.require_staff()?;
        self.repository.attractions.update(id, update).await
    }

    /// Delete an attraction (staff only)
    pub async fn delete_attraction(&self, caller: &Caller, id: i32) -> AppResult<()> {
        caller.require_staff()?;
        self.repository.attractions.delete(id).await
    }

    /// Toggle the attraction in the caller's favorites; returns true when
    /// added, false when removed. The attraction must be visible to the
    /// caller.
    pub async fn toggle_favorite(&self, caller: &Caller, attraction_id: i32) -> AppResult<bool> {
        let user_id = caller.require_authenticated()?;
        self.repository
            .attractions
            .get_by_id(attraction_id, caller.is_staff())
            .await?;
        self.repository
            .attractions
            .toggle_favorite(attraction_id, user_id)
            .await
    }

    /// List the caller's favorite attractions
    pub async fn favorites(&self, caller: &Caller) -> AppResult<Vec<Attraction>> {
        let user_id = caller.require_authenticated()?;
        self.repository.attractions.favorites_for_user(user_id).await
    }

    /// List regions
    pub async fn list_regions(&self) -> AppResult<Vec<Region>> {
        self.repository.taxonomy.list_regions().await
    }

    /// List categories
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.repository.taxonomy.list_categories().await
    }

    /// Create a region (staff only)
    pub async fn create_region(&self, caller: &Caller, name: &str) -> AppResult<Region> {
        caller.require_staff()?;
        self.repository.taxonomy.create_region(name).await
    }

    /// Create a category (staff only)
    pub async fn create_category(&self, caller: &Caller, name: &str) -> AppResult<Category> {
        caller.require_staff()?;
        self.repository.taxonomy.create_category(name).await
    }

    /// Delete a region (staff only)
    pub async fn delete_region(&self, caller: &Caller, id: i32) -> AppResult<()> {
        caller.require_staff()?;
        self.repository.taxonomy.delete_region(id).await
    }

    /// Delete a category (staff only)
    pub async fn delete_category(&self, caller: &Caller, id: i32) -> AppResult<()> {
        caller.require_staff()?;
        self.repository.taxonomy.delete_category(id).await
    }
}
