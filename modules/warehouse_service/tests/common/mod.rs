//! Common test utilities: fixtures, in-memory repository, HTTP helpers
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
};
use parking_lot::{Mutex, RwLock};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use warehouse_service::api::rest::{AccessLogEntry, AccessLogSink};
use warehouse_service::domain::WarehouseRepository;
use warehouse_service::infra::storage::migrations::Migrator;
use warehouse_service::{NewWarehouse, TempAndCapacityPatch, Warehouse, WarehouseError};

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

/// The warehouse used throughout the HTTP scenarios
pub fn avenida_teste() -> NewWarehouse {
    NewWarehouse {
        address: "Avenida Teste".to_string(),
        telephone: "31 999999999".to_string(),
        warehouse_code: "AZADAS30".to_string(),
        minimum_capacity: 10,
        minimum_temperature: 9.0,
        locality_id: 1,
    }
}

pub fn warehouse_with_code(code: &str) -> NewWarehouse {
    NewWarehouse {
        address: format!("Rua {code}, 100"),
        telephone: "11 40028922".to_string(),
        warehouse_code: code.to_string(),
        minimum_capacity: 25,
        minimum_temperature: -4.5,
        locality_id: 7,
    }
}

/// Fresh in-memory SQLite database with the warehouse schema applied
pub async fn sqlite_db() -> Arc<DatabaseConnection> {
    use sea_orm_migration::MigratorTrait;

    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

// ===== In-memory repository =====

#[derive(Default)]
struct MemoryState {
    next_id: i64,
    rows: BTreeMap<i64, Warehouse>,
}

/// Repository double honouring the same classification rules as the SQL one
#[derive(Default)]
pub struct InMemoryWarehouseRepo {
    state: RwLock<MemoryState>,
}

impl InMemoryWarehouseRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.state.read().rows.len()
    }
}

fn ensure_live(ctx: &CancellationToken) -> Result<(), WarehouseError> {
    if ctx.is_cancelled() {
        return Err(WarehouseError::Cancelled);
    }
    Ok(())
}

#[async_trait]
impl WarehouseRepository for InMemoryWarehouseRepo {
    async fn create(
        &self,
        ctx: &CancellationToken,
        new: &NewWarehouse,
    ) -> Result<Warehouse, WarehouseError> {
        ensure_live(ctx)?;
        let mut state = self.state.write();

        if state
            .rows
            .values()
            .any(|w| w.warehouse_code == new.warehouse_code)
        {
            return Err(WarehouseError::duplicate_code(&new.warehouse_code));
        }

        state.next_id += 1;
        let warehouse = new.clone().with_id(state.next_id);
        state.rows.insert(warehouse.id, warehouse.clone());
        Ok(warehouse)
    }

    async fn list_all(&self, ctx: &CancellationToken) -> Result<Vec<Warehouse>, WarehouseError> {
        ensure_live(ctx)?;
        Ok(self.state.read().rows.values().cloned().collect())
    }

    async fn get_by_id(
        &self,
        ctx: &CancellationToken,
        id: i64,
    ) -> Result<Warehouse, WarehouseError> {
        ensure_live(ctx)?;
        self.state
            .read()
            .rows
            .get(&id)
            .cloned()
            .ok_or(WarehouseError::NotFound { id })
    }

    async fn update(
        &self,
        ctx: &CancellationToken,
        id: i64,
        patch: TempAndCapacityPatch,
    ) -> Result<Warehouse, WarehouseError> {
        ensure_live(ctx)?;
        let mut state = self.state.write();
        let warehouse = state
            .rows
            .get_mut(&id)
            .ok_or(WarehouseError::NotFound { id })?;
        patch.apply_to(warehouse);
        Ok(warehouse.clone())
    }

    async fn delete(&self, ctx: &CancellationToken, id: i64) -> Result<(), WarehouseError> {
        ensure_live(ctx)?;
        self.state
            .write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(WarehouseError::NotFound { id })
    }
}

/// Repository whose every call fails with the given error
pub struct FailingRepo(pub WarehouseError);

#[async_trait]
impl WarehouseRepository for FailingRepo {
    async fn create(
        &self,
        _ctx: &CancellationToken,
        _new: &NewWarehouse,
    ) -> Result<Warehouse, WarehouseError> {
        Err(self.0.clone())
    }

    async fn list_all(&self, _ctx: &CancellationToken) -> Result<Vec<Warehouse>, WarehouseError> {
        Err(self.0.clone())
    }

    async fn get_by_id(
        &self,
        _ctx: &CancellationToken,
        _id: i64,
    ) -> Result<Warehouse, WarehouseError> {
        Err(self.0.clone())
    }

    async fn update(
        &self,
        _ctx: &CancellationToken,
        _id: i64,
        _patch: TempAndCapacityPatch,
    ) -> Result<Warehouse, WarehouseError> {
        Err(self.0.clone())
    }

    async fn delete(&self, _ctx: &CancellationToken, _id: i64) -> Result<(), WarehouseError> {
        Err(self.0.clone())
    }
}

// ===== Access log sinks =====

#[derive(Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<AccessLogEntry>>,
}

impl RecordingSink {
    pub fn entries(&self) -> Vec<AccessLogEntry> {
        self.entries.lock().clone()
    }
}

impl AccessLogSink for RecordingSink {
    fn record(&self, entry: &AccessLogEntry) -> anyhow::Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }
}

pub struct BrokenSink;

impl AccessLogSink for BrokenSink {
    fn record(&self, _entry: &AccessLogEntry) -> anyhow::Result<()> {
        anyhow::bail!("log backend unreachable")
    }
}

// ===== HTTP helpers =====

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
