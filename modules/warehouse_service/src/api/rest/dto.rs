//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope: every successful body is `{"data": ...}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Warehouse response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseDto {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Avenida Teste")]
    pub address: String,

    #[schema(example = "31 999999999")]
    pub telephone: String,

    /// Unique warehouse code
    #[schema(example = "AZADAS30")]
    pub warehouse_code: String,

    #[schema(example = 10)]
    pub minimum_capacity: i64,

    #[schema(example = 9.0)]
    pub minimum_temperature: f64,

    #[schema(example = 1)]
    pub locality_id: i64,
}

/// Warehouse creation request, all fields required
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarehouseRequest {
    #[schema(example = "Avenida Teste")]
    pub address: String,

    #[schema(example = "31 999999999")]
    pub telephone: String,

    #[schema(example = "AZADAS30")]
    pub warehouse_code: String,

    #[schema(example = 10)]
    pub minimum_capacity: i64,

    #[schema(example = 9.0)]
    pub minimum_temperature: f64,

    #[schema(example = 1)]
    pub locality_id: i64,
}

/// Partial update request, both fields required
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTempAndCapacityRequest {
    #[schema(example = 66)]
    pub minimum_capacity: i64,

    #[schema(example = 999.0)]
    pub minimum_temperature: f64,
}
