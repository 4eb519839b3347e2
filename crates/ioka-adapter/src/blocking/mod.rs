/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: Blocking counterparts of the async client and order actions
[POS]:    Blocking layer - synchronous API surface
[UPDATE]: When the async surface changes
*/

pub mod actions;
pub mod client;

pub use actions::OrderActions;
pub use client::IokaClient;
