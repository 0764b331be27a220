//! Client-side application settings.

use crate::shared::format::PlateFormat;
use crate::system::permissions::PermissionSet;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub workshop_name: String,
    /// `log` level name: error, warn, info, debug, trace
    pub log_level: String,
    pub default_plate_format: PlateFormat,
    pub toast_timeout_ms: u64,
    /// Permissions granted to the demo session at start
    pub permissions: PermissionSet,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workshop_name: "Oficina".to_string(),
            log_level: "debug".to_string(),
            default_plate_format: PlateFormat::Mercosul,
            toast_timeout_ms: 4000,
            permissions: PermissionSet::all(),
        }
    }
}

impl AppConfig {
    /// Missing keys fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::permissions::Permission;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let cfg = AppConfig::from_json(r#"{"workshop_name":"Auto Center Silva"}"#).unwrap();
        assert_eq!(cfg.workshop_name, "Auto Center Silva");
        assert_eq!(cfg.toast_timeout_ms, 4000);
        assert_eq!(cfg.permissions, PermissionSet::all());
    }

    #[test]
    fn test_permissions_and_plate_format_from_json() {
        let cfg = AppConfig::from_json(
            r#"{"permissions":["clients.view","orders.view"],"default_plate_format":"old"}"#,
        )
        .unwrap();
        assert!(cfg.permissions.contains(Permission::ClientsView));
        assert!(!cfg.permissions.contains(Permission::SettingsManage));
        assert_eq!(cfg.default_plate_format, PlateFormat::Old);
    }

    #[test]
    fn test_log_level_fallback() {
        let mut cfg = AppConfig::default();
        cfg.log_level = "warn".into();
        assert_eq!(cfg.log_level(), log::Level::Warn);
        cfg.log_level = "loud".into();
        assert_eq!(cfg.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AppConfig::from_json("{").is_err());
    }
}
