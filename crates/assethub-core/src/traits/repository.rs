//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::PageRequest;
use crate::types::sorting::SortField;

/// Generic CRUD repository trait.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed repository. Entity-specific query
/// methods are defined on the concrete repository structs, which live
/// in the data-access crate alongside their SQL.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Return the requested window of entities.
    async fn list(&self, page: &PageRequest, sort: Option<&SortField>)
    -> AppResult<Vec<Entity>>;

    /// Count total entities in the full filtered set.
    async fn count(&self) -> AppResult<u64>;

    /// Create a new entity and return it.
    async fn insert(&self, entity: &Entity) -> AppResult<Entity>;

    /// Update an existing entity and return the updated version.
    async fn update(&self, entity: &Entity) -> AppResult<Entity>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: &Id) -> AppResult<bool>;

    /// Fetch one window plus the total count, the inputs of a paged
    /// envelope. The first error short-circuits.
    async fn fetch_page(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<(Vec<Entity>, u64)> {
        let total = self.count().await?;
        let rows = self.list(page, sort).await?;
        Ok((rows, total))
    }
}
