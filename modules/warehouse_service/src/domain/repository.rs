//! Repository trait for data access
//!
//! This trait defines the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{NewWarehouse, TempAndCapacityPatch, Warehouse, WarehouseError};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Repository for warehouse records
///
/// Implementations classify store outcomes themselves: a duplicate warehouse
/// code is `Conflict`, a missing row is `NotFound`, a cancelled `ctx` is
/// `Cancelled`, anything else is `Internal`.
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// Insert a new warehouse and return it with its assigned id
    async fn create(
        &self,
        ctx: &CancellationToken,
        new: &NewWarehouse,
    ) -> Result<Warehouse, WarehouseError>;

    /// List all warehouses in insertion order
    async fn list_all(&self, ctx: &CancellationToken) -> Result<Vec<Warehouse>, WarehouseError>;

    /// Find a warehouse by id
    async fn get_by_id(&self, ctx: &CancellationToken, id: i64)
        -> Result<Warehouse, WarehouseError>;

    /// Apply a partial update and return the full stored record
    async fn update(
        &self,
        ctx: &CancellationToken,
        id: i64,
        patch: TempAndCapacityPatch,
    ) -> Result<Warehouse, WarehouseError>;

    /// Hard delete a warehouse
    async fn delete(&self, ctx: &CancellationToken, id: i64) -> Result<(), WarehouseError>;
}
