//! Warehouse server: loads configuration, connects the store and serves HTTP

mod config;
mod telemetry;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use clap::Parser;
use sea_orm::{ConnectOptions, Database};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use warehouse_service::api::rest::{ApiDoc, TracingAccessLog};
use warehouse_service::WarehouseServiceModule;

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "warehouse-server", version, about = "Warehouse metadata HTTP service")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging)?;

    let mut opts = ConnectOptions::new(config.database.url.clone());
    opts.max_connections(config.database.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .context("failed to connect to database")?;

    let module = WarehouseServiceModule::init(config.warehouse.clone(), Arc::new(db)).await?;

    let shutdown = CancellationToken::new();
    let app = build_router(&module, shutdown.clone());

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "warehouse server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!("warehouse server stopped");
    Ok(())
}

fn build_router(module: &WarehouseServiceModule, shutdown: CancellationToken) -> Router {
    module
        .register_rest(Router::new(), Arc::new(TracingAccessLog), shutdown)
        .route("/openapi.json", get(openapi_spec))
        .layer(TraceLayer::new_for_http())
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Resolves on Ctrl+C or SIGTERM and cancels every in-flight request
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, cancelling in-flight requests");
    shutdown.cancel();
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;
    use warehouse_service::Config;

    async fn test_module() -> WarehouseServiceModule {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await.unwrap();
        WarehouseServiceModule::init(Config::default(), Arc::new(db))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = build_router(&test_module().await, CancellationToken::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(doc["paths"]["/warehouses/{id}"].is_object());
    }

    #[tokio::test]
    async fn warehouse_routes_are_mounted() {
        let app = build_router(&test_module().await, CancellationToken::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/warehouses")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn cli_accepts_config_path() {
        let cli = Cli::parse_from(["warehouse-server", "--config", "warehouse.yaml"]);
        assert_eq!(cli.config, Some(PathBuf::from("warehouse.yaml")));
    }
}
