//! User settings for BodAI
//!
//! Manages server, password hashing and membership preferences.

use serde::{Deserialize, Serialize};

use super::paths::BodaiPaths;
use crate::crypto::password::PasswordHashParams;
use crate::error::{BodaiError, BodaiResult};
use crate::membership::{parse_ether, WalletAddress, Wei, MEMBERSHIP_PRICE};

/// HTTP API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address the API binds to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Origins allowed to call the API from a browser
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Default `tracing` filter directive (RUST_LOG takes precedence)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            allowed_origins: default_allowed_origins(),
            log_filter: default_log_filter(),
        }
    }
}

/// Membership payment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipSettings {
    /// Address of the membership contract, if one has been configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,

    /// Membership price in ether, as a decimal string
    #[serde(default = "default_membership_price")]
    pub price_eth: String,
}

impl MembershipSettings {
    /// The configured price in wei
    pub fn price(&self) -> BodaiResult<Wei> {
        parse_ether(&self.price_eth).map_err(|_| {
            BodaiError::Config(format!("Invalid membership price: '{}'", self.price_eth))
        })
    }

    /// The configured contract address, if any
    pub fn contract(&self) -> BodaiResult<Option<WalletAddress>> {
        self.contract_address
            .as_deref()
            .map(|address| {
                address.parse::<WalletAddress>().map_err(|_| {
                    BodaiError::Config(format!("Invalid membership contract address: '{}'", address))
                })
            })
            .transpose()
    }
}

impl Default for MembershipSettings {
    fn default() -> Self {
        Self {
            contract_address: None,
            price_eth: default_membership_price(),
        }
    }
}

/// User settings for BodAI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// HTTP API settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Argon2id parameters for new password hashes
    #[serde(default)]
    pub password_hashing: PasswordHashParams,

    /// Membership payment settings
    #[serde(default)]
    pub membership: MembershipSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_membership_price() -> String {
    MEMBERSHIP_PRICE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            server: ServerSettings::default(),
            password_hashing: PasswordHashParams::default(),
            membership: MembershipSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BodaiPaths) -> Result<Self, BodaiError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BodaiError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| BodaiError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BodaiPaths) -> Result<(), BodaiError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BodaiError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BodaiError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.bind, "127.0.0.1:3000");
        assert_eq!(settings.server.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(settings.membership.price_eth, "0.01");
        assert!(settings.membership.contract_address.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BodaiPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.server.bind = "0.0.0.0:8080".into();
        settings.membership.price_eth = "0.05".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.server.bind, "0.0.0.0:8080");
        assert_eq!(loaded.membership.price_eth, "0.05");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BodaiPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"server": {"bind": "127.0.0.1:9000"}}"#)
            .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.server.bind, "127.0.0.1:9000");
        assert_eq!(loaded.server.log_filter, "info");
    }

    #[test]
    fn test_membership_price_and_contract() {
        let mut membership = MembershipSettings::default();
        assert_eq!(membership.price().unwrap(), Wei(10_000_000_000_000_000));
        assert!(membership.contract().unwrap().is_none());

        membership.price_eth = "0.05".into();
        membership.contract_address = Some("0x00000000000000000000000000000000000000BB".into());
        assert_eq!(membership.price().unwrap(), Wei(50_000_000_000_000_000));
        assert_eq!(
            membership.contract().unwrap().unwrap().as_str(),
            "0x00000000000000000000000000000000000000bb"
        );

        membership.price_eth = "ten".into();
        assert!(matches!(membership.price(), Err(BodaiError::Config(_))));
        membership.contract_address = Some("0x123".into());
        assert!(matches!(membership.contract(), Err(BodaiError::Config(_))));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BodaiPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(BodaiError::Config(_))));
    }
}
