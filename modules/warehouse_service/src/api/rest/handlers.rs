//! HTTP request handlers - thin layer that delegates to the warehouse API

use super::{
    dto::*,
    error::{map_domain_error, map_json_rejection, map_path_rejection, ErrorBody},
};
use crate::contract::{NewWarehouse, WarehouseApi, WarehouseError};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    Extension, Json,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct RestState {
    pub api: Arc<dyn WarehouseApi>,
    pub request_timeout: Duration,
    /// Parent of every request token; cancelled on server shutdown
    pub shutdown: CancellationToken,
}

/// Unit of work for one request.
///
/// The token is cancelled when the server shuts down, when the deadline
/// passes, or when the scope is dropped with the request future.
pub struct RequestScope {
    token: CancellationToken,
    _guard: DropGuard,
}

impl RequestScope {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl RestState {
    pub fn new(api: Arc<dyn WarehouseApi>, request_timeout: Duration) -> Self {
        Self {
            api,
            request_timeout,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn scope(&self) -> RequestScope {
        let token = self.shutdown.child_token();
        RequestScope {
            _guard: token.clone().drop_guard(),
            token,
        }
    }

    async fn within_deadline<T>(
        &self,
        scope: &RequestScope,
        call: impl Future<Output = Result<T, WarehouseError>>,
    ) -> Result<T, WarehouseError> {
        match tokio::time::timeout(self.request_timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                scope.token.cancel();
                tracing::warn!(timeout = ?self.request_timeout, "request deadline exceeded");
                Err(WarehouseError::Cancelled)
            }
        }
    }
}

/// Create a warehouse
#[utoipa::path(
    post,
    path = "/warehouses",
    tag = "warehouses",
    request_body = CreateWarehouseRequest,
    responses(
        (status = 201, description = "Warehouse created", body = DataEnvelope<WarehouseDto>),
        (status = 409, description = "Warehouse code already exists", body = ErrorBody),
        (status = 422, description = "Malformed or missing fields", body = ErrorBody)
    )
)]
pub async fn create_warehouse(
    Extension(state): Extension<RestState>,
    payload: Result<Json<CreateWarehouseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataEnvelope<WarehouseDto>>), ErrorBody> {
    let Json(req) =
        payload.map_err(|r| map_json_rejection(r, StatusCode::UNPROCESSABLE_ENTITY))?;
    let new = NewWarehouse::try_from(req)
        .map_err(|e| ErrorBody::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let scope = state.scope();
    let created = state
        .within_deadline(&scope, state.api.create(scope.token(), new))
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(DataEnvelope::new(created.into())),
    ))
}

/// List all warehouses
#[utoipa::path(
    get,
    path = "/warehouses",
    tag = "warehouses",
    responses(
        (status = 200, description = "All warehouses", body = DataEnvelope<Vec<WarehouseDto>>),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn list_warehouses(
    Extension(state): Extension<RestState>,
) -> Result<Json<DataEnvelope<Vec<WarehouseDto>>>, ErrorBody> {
    let scope = state.scope();
    let warehouses = state
        .within_deadline(&scope, state.api.list_all(scope.token()))
        .await
        .map_err(map_domain_error)?;

    let items: Vec<WarehouseDto> = warehouses.into_iter().map(|w| w.into()).collect();
    Ok(Json(DataEnvelope::new(items)))
}

/// Get a specific warehouse
#[utoipa::path(
    get,
    path = "/warehouses/{id}",
    tag = "warehouses",
    params(("id" = i64, Path, description = "Warehouse identifier")),
    responses(
        (status = 200, description = "Warehouse found", body = DataEnvelope<WarehouseDto>),
        (status = 400, description = "Non-numeric id", body = ErrorBody),
        (status = 404, description = "Warehouse not found", body = ErrorBody)
    )
)]
pub async fn get_warehouse(
    Extension(state): Extension<RestState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DataEnvelope<WarehouseDto>>, ErrorBody> {
    let Path(id) = id.map_err(map_path_rejection)?;

    let scope = state.scope();
    let warehouse = state
        .within_deadline(&scope, state.api.get_by_id(scope.token(), id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(DataEnvelope::new(warehouse.into())))
}

/// Update minimum temperature and capacity
#[utoipa::path(
    patch,
    path = "/warehouses/{id}",
    tag = "warehouses",
    params(("id" = i64, Path, description = "Warehouse identifier")),
    request_body = UpdateTempAndCapacityRequest,
    responses(
        (status = 200, description = "Warehouse updated", body = DataEnvelope<WarehouseDto>),
        (status = 400, description = "Non-numeric id or malformed body", body = ErrorBody),
        (status = 404, description = "Warehouse not found", body = ErrorBody)
    )
)]
pub async fn update_warehouse(
    Extension(state): Extension<RestState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTempAndCapacityRequest>, JsonRejection>,
) -> Result<Json<DataEnvelope<WarehouseDto>>, ErrorBody> {
    let Path(id) = id.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(|r| map_json_rejection(r, StatusCode::BAD_REQUEST))?;

    let scope = state.scope();
    let warehouse = state
        .within_deadline(
            &scope,
            state.api.update_temp_and_capacity(
                scope.token(),
                id,
                req.minimum_temperature,
                req.minimum_capacity,
            ),
        )
        .await
        .map_err(map_domain_error)?;

    Ok(Json(DataEnvelope::new(warehouse.into())))
}

/// Delete a warehouse
#[utoipa::path(
    delete,
    path = "/warehouses/{id}",
    tag = "warehouses",
    params(("id" = i64, Path, description = "Warehouse identifier")),
    responses(
        (status = 204, description = "Warehouse deleted"),
        (status = 400, description = "Non-numeric id", body = ErrorBody),
        (status = 404, description = "Warehouse not found", body = ErrorBody)
    )
)]
pub async fn delete_warehouse(
    Extension(state): Extension<RestState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ErrorBody> {
    let Path(id) = id.map_err(map_path_rejection)?;

    let scope = state.scope();
    state
        .within_deadline(&scope, state.api.delete(scope.token(), id))
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
