//! Terminal client for a remote employee-records API.
//!
//! The crate is split along the same seams as the UI architecture:
//! observable state containers (`vm`) sit between the HTTP boundary
//! (`api`) and the terminal views (`ui`), with a small fragment router
//! (`router`) deciding which view is active.

pub mod api;
pub mod config;
pub mod model;
pub mod router;
pub mod ui;
pub mod validate;
pub mod vm;
