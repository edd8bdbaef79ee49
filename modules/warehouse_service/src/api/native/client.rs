//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{NewWarehouse, Warehouse, WarehouseApi, WarehouseError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
/// The REST layer consumes it through `Arc<dyn WarehouseApi>`.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl WarehouseApi for NativeClient {
    async fn create(
        &self,
        ctx: &CancellationToken,
        new: NewWarehouse,
    ) -> Result<Warehouse, WarehouseError> {
        self.service.create(ctx, new).await
    }

    async fn list_all(&self, ctx: &CancellationToken) -> Result<Vec<Warehouse>, WarehouseError> {
        self.service.list_all(ctx).await
    }

    async fn get_by_id(
        &self,
        ctx: &CancellationToken,
        id: i64,
    ) -> Result<Warehouse, WarehouseError> {
        self.service.get_by_id(ctx, id).await
    }

    async fn update_temp_and_capacity(
        &self,
        ctx: &CancellationToken,
        id: i64,
        minimum_temperature: f64,
        minimum_capacity: i64,
    ) -> Result<Warehouse, WarehouseError> {
        self.service
            .update_temp_and_capacity(ctx, id, minimum_temperature, minimum_capacity)
            .await
    }

    async fn delete(&self, ctx: &CancellationToken, id: i64) -> Result<(), WarehouseError> {
        self.service.delete(ctx, id).await
    }
}
