//! HTTP boundary to the remote employee-records service.
//!
//! The remote API is a REST-like JSON service addressed as a collection
//! resource plus single-resource-by-id paths. Transport and HTTP failures
//! are translated into [`ApiError`] here; callers never see `reqwest`
//! types directly.

mod client;
mod error;
pub mod wire;

pub use client::{EmployeeApi, API_KEY_HEADER, CUSTOMER_HEADER};
pub use error::ApiError;
