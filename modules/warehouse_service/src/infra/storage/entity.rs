//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Warehouses table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "warehouses")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i64,

    pub address: String,

    pub telephone: String,

    /// Unique business code
    #[sea_orm(unique)]
    pub warehouse_code: String,

    pub minimum_capacity: i64,

    pub minimum_temperature: f64,

    /// External locality reference, no foreign key
    pub locality_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
