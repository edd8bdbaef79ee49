//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{self, WarehouseError};

impl From<contract::Warehouse> for WarehouseDto {
    fn from(warehouse: contract::Warehouse) -> Self {
        Self {
            id: warehouse.id,
            address: warehouse.address,
            telephone: warehouse.telephone,
            warehouse_code: warehouse.warehouse_code,
            minimum_capacity: warehouse.minimum_capacity,
            minimum_temperature: warehouse.minimum_temperature,
            locality_id: warehouse.locality_id,
        }
    }
}

impl TryFrom<CreateWarehouseRequest> for contract::NewWarehouse {
    type Error = WarehouseError;

    fn try_from(req: CreateWarehouseRequest) -> Result<Self, Self::Error> {
        require_text("address", &req.address)?;
        require_text("telephone", &req.telephone)?;
        require_text("warehouseCode", &req.warehouse_code)?;

        Ok(Self {
            address: req.address,
            telephone: req.telephone,
            warehouse_code: req.warehouse_code,
            minimum_capacity: req.minimum_capacity,
            minimum_temperature: req.minimum_temperature,
            locality_id: req.locality_id,
        })
    }
}

fn require_text(field: &str, value: &str) -> Result<(), WarehouseError> {
    if value.trim().is_empty() {
        return Err(WarehouseError::validation(format!(
            "field '{field}' is required and must not be empty"
        )));
    }
    Ok(())
}
