//! SeaORM repository implementations

use crate::contract::{NewWarehouse, TempAndCapacityPatch, Warehouse, WarehouseError};
use crate::domain::repository::WarehouseRepository;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::entity;

pub struct SeaOrmWarehouseRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmWarehouseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Race a store call against `ctx` and classify its failure.
///
/// Cancellation wins ties so an already-cancelled context never touches the store.
async fn run<T, F>(ctx: &CancellationToken, op: &'static str, call: F) -> Result<T, WarehouseError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    tokio::select! {
        biased;
        _ = ctx.cancelled() => {
            tracing::debug!(op, "store call abandoned, context cancelled");
            Err(WarehouseError::Cancelled)
        }
        res = call => res.map_err(|err| classify_db_error(op, err)),
    }
}

fn classify_db_error(op: &'static str, err: DbErr) -> WarehouseError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(op, %detail, "unique constraint violated");
            WarehouseError::Conflict { reason: detail }
        }
        _ => {
            tracing::error!(op, error = %err, "warehouse store call failed");
            WarehouseError::Internal
        }
    }
}

#[async_trait]
impl WarehouseRepository for SeaOrmWarehouseRepository {
    async fn create(
        &self,
        ctx: &CancellationToken,
        new: &NewWarehouse,
    ) -> Result<Warehouse, WarehouseError> {
        let active: entity::ActiveModel = new.into();

        let inserted = run(ctx, "create", entity::Entity::insert(active).exec(&*self.db))
            .await
            .map_err(|err| match err {
                WarehouseError::Conflict { .. } => {
                    WarehouseError::duplicate_code(&new.warehouse_code)
                }
                other => other,
            })?;

        Ok(new.clone().with_id(inserted.last_insert_id))
    }

    async fn list_all(&self, ctx: &CancellationToken) -> Result<Vec<Warehouse>, WarehouseError> {
        let results = run(
            ctx,
            "list_all",
            entity::Entity::find()
                .order_by_asc(entity::Column::Id)
                .all(&*self.db),
        )
        .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn get_by_id(
        &self,
        ctx: &CancellationToken,
        id: i64,
    ) -> Result<Warehouse, WarehouseError> {
        run(ctx, "get_by_id", entity::Entity::find_by_id(id).one(&*self.db))
            .await?
            .map(Warehouse::from)
            .ok_or(WarehouseError::NotFound { id })
    }

    async fn update(
        &self,
        ctx: &CancellationToken,
        id: i64,
        patch: TempAndCapacityPatch,
    ) -> Result<Warehouse, WarehouseError> {
        let result = run(
            ctx,
            "update",
            entity::Entity::update_many()
                .col_expr(
                    entity::Column::MinimumCapacity,
                    Expr::value(patch.minimum_capacity),
                )
                .col_expr(
                    entity::Column::MinimumTemperature,
                    Expr::value(patch.minimum_temperature),
                )
                .filter(entity::Column::Id.eq(id))
                .exec(&*self.db),
        )
        .await?;

        if result.rows_affected == 0 {
            return Err(WarehouseError::NotFound { id });
        }

        self.get_by_id(ctx, id).await
    }

    async fn delete(&self, ctx: &CancellationToken, id: i64) -> Result<(), WarehouseError> {
        let result = run(
            ctx,
            "delete",
            entity::Entity::delete_by_id(id).exec(&*self.db),
        )
        .await?;

        if result.rows_affected == 0 {
            return Err(WarehouseError::NotFound { id });
        }

        Ok(())
    }
}
