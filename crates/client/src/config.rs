//! Reads the form configuration the host page provides.
//!
//! - Web: JSON text of the page's `script.js-config` element
//! - Desktop: JSON file named by `GROUPFORMS_CONFIG`, falling back to
//!   `groupforms/config.json` in the platform config directory

use groupforms_shared::{ConfigError, FormConfig};

#[cfg(target_arch = "wasm32")]
pub fn read_config() -> Result<FormConfig, ConfigError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ConfigError::NotFound("no document".to_string()))?;
    let element = document
        .query_selector("script.js-config")
        .ok()
        .flatten()
        .ok_or_else(|| ConfigError::NotFound("script.js-config element".to_string()))?;
    FormConfig::from_json(&element.text_content().unwrap_or_default())
}

#[cfg(not(target_arch = "wasm32"))]
pub const CONFIG_ENV: &str = "GROUPFORMS_CONFIG";

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> Option<std::path::PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(path.into());
    }
    Some(dirs::config_dir()?.join("groupforms").join("config.json"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_config() -> Result<FormConfig, ConfigError> {
    let path = config_path()
        .ok_or_else(|| ConfigError::NotFound("no config directory on this platform".to_string()))?;
    let json = std::fs::read_to_string(&path)
        .map_err(|e| ConfigError::NotFound(format!("{}: {e}", path.display())))?;
    FormConfig::from_json(&json)
}
