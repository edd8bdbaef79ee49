//! Warehouse Service Module
//!
//! CRUD management of warehouse metadata (address, contact, unique code,
//! minimum capacity and temperature, locality reference) over a relational
//! store, exposed in-process through [`WarehouseApi`] and over HTTP.

// Public exports
pub mod contract;
pub use contract::{
    client::WarehouseApi, error::WarehouseError, NewWarehouse, TempAndCapacityPatch, Warehouse,
};

pub mod module;
pub use module::WarehouseServiceModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
