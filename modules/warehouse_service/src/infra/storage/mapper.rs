//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{NewWarehouse, Warehouse};

impl From<entity::Model> for Warehouse {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            address: entity.address,
            telephone: entity.telephone,
            warehouse_code: entity.warehouse_code,
            minimum_capacity: entity.minimum_capacity,
            minimum_temperature: entity.minimum_temperature,
            locality_id: entity.locality_id,
        }
    }
}

impl From<&NewWarehouse> for entity::ActiveModel {
    fn from(model: &NewWarehouse) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            address: Set(model.address.clone()),
            telephone: Set(model.telephone.clone()),
            warehouse_code: Set(model.warehouse_code.clone()),
            minimum_capacity: Set(model.minimum_capacity),
            minimum_temperature: Set(model.minimum_temperature),
            locality_id: Set(model.locality_id),
        }
    }
}
