//! Route registration

use super::{
    access_log::{report_outcome, AccessLogSink},
    handlers::{self, RestState},
};
use axum::{middleware, routing::get, Extension, Router};
use std::sync::Arc;

/// Register all warehouse REST routes onto `router`.
///
/// Every warehouse route reports its outcome to `access_log`.
pub fn register_routes(
    router: Router,
    state: RestState,
    access_log: Arc<dyn AccessLogSink>,
) -> Router {
    let warehouses = Router::new()
        .route(
            "/warehouses",
            get(handlers::list_warehouses).post(handlers::create_warehouse),
        )
        .route(
            "/warehouses/{id}",
            get(handlers::get_warehouse)
                .patch(handlers::update_warehouse)
                .delete(handlers::delete_warehouse),
        )
        .route_layer(middleware::from_fn_with_state(access_log, report_outcome))
        .layer(Extension(state));

    router.merge(warehouses)
}
