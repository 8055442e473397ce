pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

/// Re-export important types for easier access
pub use crate::models::{CartLine, CartLineRecord, MenuItem, MenuItemRecord};

pub use crate::api::customer::CustomerApi;
pub use crate::config::CartConfig;
pub use crate::core::catalog::Catalog;
pub use crate::core::error::Error;
pub use crate::core::order::OrderManager;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
