//! Application configuration

use anyhow::Result;

use auth::AuthConfig;
use common::FileStoreConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the durable key-value document lives
    pub storage: FileStoreConfig,
    /// Session manager tuning
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SHUTTERBOX_STORAGE_PATH`: storage file path (default: "shutterbox.json")
    /// - `SHUTTERBOX_AUTH_DELAY_MS`: simulated backend latency (default: 1000)
    pub fn from_env() -> Result<Self> {
        Ok(AppConfig {
            storage: FileStoreConfig::from_env()?,
            auth: AuthConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_app_config_from_env() {
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.storage.path.to_str(), Some("shutterbox.json"));
        assert_eq!(config.auth.delay_ms, 1000);
    }

    #[test]
    #[serial]
    fn test_app_config_from_env_with_custom_values() {
        unsafe {
            std::env::set_var("SHUTTERBOX_STORAGE_PATH", "/tmp/album.json");
            std::env::set_var("SHUTTERBOX_AUTH_DELAY_MS", "0");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.storage.path.to_str(), Some("/tmp/album.json"));
        assert_eq!(config.auth.delay_ms, 0);

        // Clean up
        unsafe {
            std::env::remove_var("SHUTTERBOX_STORAGE_PATH");
            std::env::remove_var("SHUTTERBOX_AUTH_DELAY_MS");
        }
    }
}
