//! OpenAPI document for the warehouse REST API

use super::{dto::*, error::ErrorBody, handlers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_warehouse,
        handlers::list_warehouses,
        handlers::get_warehouse,
        handlers::update_warehouse,
        handlers::delete_warehouse,
    ),
    components(schemas(
        WarehouseDto,
        CreateWarehouseRequest,
        UpdateTempAndCapacityRequest,
        ErrorBody
    )),
    tags((name = "warehouses", description = "Warehouse metadata management"))
)]
pub struct ApiDoc;
