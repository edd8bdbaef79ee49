//! Native client trait for inter-module communication
//!
//! This trait defines the API that the REST layer and other modules use to
//! interact with warehouse service. NO HTTP - direct function calls.

use super::{
    error::WarehouseError,
    model::{NewWarehouse, Warehouse},
};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Warehouse service API
///
/// Every call takes the caller's cancellation token; cancelling it abandons
/// the in-flight store statement and yields [`WarehouseError::Cancelled`].
#[async_trait]
pub trait WarehouseApi: Send + Sync {
    /// Create a warehouse; the identifier is assigned by the store
    async fn create(
        &self,
        ctx: &CancellationToken,
        new: NewWarehouse,
    ) -> Result<Warehouse, WarehouseError>;

    /// List every warehouse; an empty store yields an empty list
    async fn list_all(&self, ctx: &CancellationToken) -> Result<Vec<Warehouse>, WarehouseError>;

    /// Get a warehouse by identifier
    async fn get_by_id(&self, ctx: &CancellationToken, id: i64)
        -> Result<Warehouse, WarehouseError>;

    /// Change minimum temperature and capacity, nothing else
    async fn update_temp_and_capacity(
        &self,
        ctx: &CancellationToken,
        id: i64,
        minimum_temperature: f64,
        minimum_capacity: i64,
    ) -> Result<Warehouse, WarehouseError>;

    /// Permanently remove a warehouse
    async fn delete(&self, ctx: &CancellationToken, id: i64) -> Result<(), WarehouseError>;
}
