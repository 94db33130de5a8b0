//! Configuration: file format, loading, and the shared store.

mod credentials;
mod loader;
mod store;
mod types;

pub use credentials::SecureString;
pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiSettings, Config};
