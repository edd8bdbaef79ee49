//! Module declaration and lifecycle

use crate::api::native::NativeClient;
use crate::api::rest::{routes::register_routes, AccessLogSink, RestState};
use crate::config::Config;
use crate::contract::WarehouseApi;
use crate::domain::{Service, WarehouseRepository};
use crate::infra::storage::{migrations::Migrator, repositories::SeaOrmWarehouseRepository};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Warehouse service module
pub struct WarehouseServiceModule {
    config: Config,
    service: Arc<Service>,
}

impl WarehouseServiceModule {
    /// Wire the module on top of an open database connection.
    ///
    /// Runs migrations first when `auto_migrate` is set.
    pub async fn init(config: Config, db: Arc<DatabaseConnection>) -> Result<Self> {
        if config.auto_migrate {
            Self::migrate(&db).await?;
        }

        let repo: Arc<dyn WarehouseRepository> = Arc::new(SeaOrmWarehouseRepository::new(db));

        tracing::info!("Warehouse service initialized");
        Ok(Self::with_repository(config, repo))
    }

    /// Wire the module on top of any repository implementation
    pub fn with_repository(config: Config, repo: Arc<dyn WarehouseRepository>) -> Self {
        Self {
            config,
            service: Arc::new(Service::new(repo)),
        }
    }

    /// Apply pending schema migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("Warehouse service migrations completed");
        Ok(())
    }

    /// In-process client for other modules
    pub fn client(&self) -> Arc<dyn WarehouseApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// Register REST routes; `shutdown` cancels every in-flight request
    pub fn register_rest(
        &self,
        router: axum::Router,
        access_log: Arc<dyn AccessLogSink>,
        shutdown: CancellationToken,
    ) -> axum::Router {
        tracing::info!("Registering warehouse service REST routes");
        let state =
            RestState::new(self.client(), self.config.request_timeout).with_shutdown(shutdown);
        register_routes(router, state, access_log)
    }
}
