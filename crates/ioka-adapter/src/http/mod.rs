/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod actions;
pub mod client;
pub(crate) mod endpoint;
pub mod error;
pub(crate) mod routes;

mod customers;
mod orders;

pub use actions::OrderActions;
pub use client::{
    API_VERSION, ClientConfig, IokaClient, PRODUCTION_BASE_URL, STAGE_BASE_URL,
};
pub use error::{IokaError, Result, StatusError, StatusErrorKind, UNKNOWN_ERROR_CODE};
