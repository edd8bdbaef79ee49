//! REST API layer

pub mod access_log;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod openapi;
pub mod routes;

pub use access_log::{AccessLogEntry, AccessLogSink, TracingAccessLog};
pub use handlers::RestState;
pub use openapi::ApiDoc;
