//! Contract models for warehouse service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

/// Stored warehouse record
#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    /// Store-assigned identifier
    pub id: i64,
    /// Street address of the facility
    pub address: String,
    /// Contact telephone
    pub telephone: String,
    /// Business code, unique across all warehouses
    pub warehouse_code: String,
    /// Minimum storage capacity
    pub minimum_capacity: i64,
    /// Minimum storage temperature
    pub minimum_temperature: f64,
    /// Reference to an external locality (not validated here)
    pub locality_id: i64,
}

/// Warehouse creation input.
///
/// Carries no identifier: the store assigns it on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWarehouse {
    pub address: String,
    pub telephone: String,
    pub warehouse_code: String,
    pub minimum_capacity: i64,
    pub minimum_temperature: f64,
    pub locality_id: i64,
}

impl NewWarehouse {
    /// Attach the store-assigned identifier
    pub fn with_id(self, id: i64) -> Warehouse {
        Warehouse {
            id,
            address: self.address,
            telephone: self.telephone,
            warehouse_code: self.warehouse_code,
            minimum_capacity: self.minimum_capacity,
            minimum_temperature: self.minimum_temperature,
            locality_id: self.locality_id,
        }
    }
}

/// Partial update covering the only fields mutable after creation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempAndCapacityPatch {
    pub minimum_capacity: i64,
    pub minimum_temperature: f64,
}

impl TempAndCapacityPatch {
    /// Apply the patch, leaving every other field untouched
    pub fn apply_to(&self, warehouse: &mut Warehouse) {
        warehouse.minimum_capacity = self.minimum_capacity;
        warehouse.minimum_temperature = self.minimum_temperature;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewWarehouse {
        NewWarehouse {
            address: "Avenida Teste".to_string(),
            telephone: "31 999999999".to_string(),
            warehouse_code: "AZADAS30".to_string(),
            minimum_capacity: 10,
            minimum_temperature: 9.0,
            locality_id: 1,
        }
    }

    #[test]
    fn with_id_keeps_every_field() {
        let warehouse = sample().with_id(7);
        assert_eq!(warehouse.id, 7);
        assert_eq!(warehouse.address, "Avenida Teste");
        assert_eq!(warehouse.warehouse_code, "AZADAS30");
        assert_eq!(warehouse.locality_id, 1);
    }

    #[test]
    fn patch_touches_only_temperature_and_capacity() {
        let mut warehouse = sample().with_id(1);
        let before = warehouse.clone();

        TempAndCapacityPatch {
            minimum_capacity: 66,
            minimum_temperature: 999.0,
        }
        .apply_to(&mut warehouse);

        assert_eq!(warehouse.minimum_capacity, 66);
        assert_eq!(warehouse.minimum_temperature, 999.0);
        assert_eq!(warehouse.id, before.id);
        assert_eq!(warehouse.address, before.address);
        assert_eq!(warehouse.telephone, before.telephone);
        assert_eq!(warehouse.warehouse_code, before.warehouse_code);
        assert_eq!(warehouse.locality_id, before.locality_id);
    }
}
