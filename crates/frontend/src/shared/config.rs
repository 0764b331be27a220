use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use web_sys::window;

const CONFIG_KEY: &str = "workshop_app_config";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the settings saved in localStorage, falling back to defaults
pub fn load_config() -> AppConfig {
    let raw = get_local_storage().and_then(|s| s.get_item(CONFIG_KEY).ok().flatten());
    config_from_stored(raw.as_deref())
}

fn config_from_stored(raw: Option<&str>) -> AppConfig {
    let Some(raw) = raw else {
        return AppConfig::default();
    };
    AppConfig::from_json(raw).unwrap_or_else(|e| {
        log::warn!("ignoring stored config: {}", e);
        AppConfig::default()
    })
}

/// Write the settings to localStorage
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    let storage = get_local_storage().ok_or_else(|| "Armazenamento local indisponível".to_string())?;
    let json = config.to_json().map_err(|e| e.to_string())?;
    storage
        .set_item(CONFIG_KEY, &json)
        .map_err(|e| format!("Falha ao gravar configurações: {:?}", e))
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_broken_config_falls_back_to_defaults() {
        assert_eq!(config_from_stored(None), AppConfig::default());
        assert_eq!(config_from_stored(Some("{not json")), AppConfig::default());
    }

    #[test]
    fn test_stored_config_is_read() {
        let cfg = config_from_stored(Some(r#"{"workshop_name":"Oficina Central","log_level":"warn"}"#));
        assert_eq!(cfg.workshop_name, "Oficina Central");
        assert_eq!(cfg.log_level(), log::Level::Warn);
    }
}
