/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public ioka adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Client for the ioka payment API.
//!
//! [`IokaClient`] is the async client; [`blocking::IokaClient`] offers the same
//! operations for synchronous code. Both share request construction and error
//! mapping, so a call returns the same result through either.

pub mod blocking;
pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    IokaClient,
    IokaError,
    OrderActions,
    PRODUCTION_BASE_URL,
    Result,
    STAGE_BASE_URL,
    StatusError,
    StatusErrorKind,
};

// Re-export all types
pub use types::*;
