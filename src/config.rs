//! Cart configuration

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};

/// Storage key the cart has always been saved under
pub const DEFAULT_STORAGE_KEY: &str = "cairoBitesCart";

/// How long a toast stays on screen (in milliseconds)
pub const DEFAULT_TOAST_MS: u64 = 3000;

/// Default location of the file-backed storage
pub const DEFAULT_STORAGE_PATH: &str = ".cairo-bites/storage.json";

/// Settings for the order manager and its storage
#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    /// Key the cart is persisted under
    pub storage_key: String,
    /// Delay after which the UI dismisses a notification
    pub notification_timeout: Duration,
    /// File used by the file-backed storage
    pub storage_path: PathBuf,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            notification_timeout: Duration::from_millis(DEFAULT_TOAST_MS),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl CartConfig {
    /// Creates a config with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from `CAIRO_BITES_*` environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            storage_key: load_or("CAIRO_BITES_STORAGE_KEY", DEFAULT_STORAGE_KEY.to_string()),
            notification_timeout: Duration::from_millis(load_or(
                "CAIRO_BITES_TOAST_MS",
                DEFAULT_TOAST_MS,
            )),
            storage_path: load_or(
                "CAIRO_BITES_STORAGE_PATH",
                PathBuf::from(DEFAULT_STORAGE_PATH),
            ),
        }
    }

    /// Sets the storage key
    pub fn with_storage_key(mut self, storage_key: &str) -> Self {
        self.storage_key = storage_key.to_string();
        self
    }

    /// Sets the notification timeout
    pub fn with_notification_timeout(mut self, timeout: Duration) -> Self {
        self.notification_timeout = timeout;
        self
    }

    /// Sets the storage file path
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }
}

fn load_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default {default:?}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default:?}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CartConfig::new();

        assert_eq!(config.storage_key, "cairoBitesCart");
        assert_eq!(config.notification_timeout, Duration::from_secs(3));
        assert_eq!(config.storage_path, PathBuf::from(".cairo-bites/storage.json"));
    }

    #[test]
    fn test_config_builder() {
        let config = CartConfig::new()
            .with_storage_key("testCart")
            .with_notification_timeout(Duration::from_millis(500))
            .with_storage_path("/tmp/cart.json");

        assert_eq!(config.storage_key, "testCart");
        assert_eq!(config.notification_timeout, Duration::from_millis(500));
        assert_eq!(config.storage_path, PathBuf::from("/tmp/cart.json"));
    }

    #[test]
    fn test_load_or_falls_back_on_bad_value() {
        env::set_var("CAIRO_BITES_TEST_BAD_MS", "soon");
        assert_eq!(load_or("CAIRO_BITES_TEST_BAD_MS", 42u64), 42);

        env::set_var("CAIRO_BITES_TEST_GOOD_MS", " 750 ");
        assert_eq!(load_or("CAIRO_BITES_TEST_GOOD_MS", 42u64), 750);

        assert_eq!(load_or("CAIRO_BITES_TEST_UNSET", 7u64), 7);
    }
}
