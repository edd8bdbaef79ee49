//! Domain service - business logic orchestration

use super::repository::WarehouseRepository;
use crate::contract::{NewWarehouse, TempAndCapacityPatch, Warehouse, WarehouseError};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Domain service for warehouse management
///
/// Repository errors are returned exactly as classified by the repository.
/// Nothing is retried.
pub struct Service {
    repo: Arc<dyn WarehouseRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn WarehouseRepository>) -> Self {
        Self { repo }
    }

    /// Create a warehouse from caller-supplied fields.
    ///
    /// No uniqueness pre-check: a duplicate code comes back from the
    /// repository as `Conflict`.
    pub async fn create(
        &self,
        ctx: &CancellationToken,
        new: NewWarehouse,
    ) -> Result<Warehouse, WarehouseError> {
        tracing::debug!(code = %new.warehouse_code, "creating warehouse");
        let created = self.repo.create(ctx, &new).await?;
        tracing::debug!(id = created.id, "warehouse created");
        Ok(created)
    }

    /// List all warehouses
    pub async fn list_all(&self, ctx: &CancellationToken) -> Result<Vec<Warehouse>, WarehouseError> {
        self.repo.list_all(ctx).await
    }

    /// Get a warehouse by id
    pub async fn get_by_id(
        &self,
        ctx: &CancellationToken,
        id: i64,
    ) -> Result<Warehouse, WarehouseError> {
        self.repo.get_by_id(ctx, id).await
    }

    /// Update minimum temperature and capacity of an existing warehouse
    pub async fn update_temp_and_capacity(
        &self,
        ctx: &CancellationToken,
        id: i64,
        minimum_temperature: f64,
        minimum_capacity: i64,
    ) -> Result<Warehouse, WarehouseError> {
        let patch = TempAndCapacityPatch {
            minimum_capacity,
            minimum_temperature,
        };

        tracing::debug!(id, ?patch, "updating warehouse temperature and capacity");
        self.repo.update(ctx, id, patch).await
    }

    /// Delete a warehouse
    pub async fn delete(&self, ctx: &CancellationToken, id: i64) -> Result<(), WarehouseError> {
        tracing::debug!(id, "deleting warehouse");
        self.repo.delete(ctx, id).await
    }
}
