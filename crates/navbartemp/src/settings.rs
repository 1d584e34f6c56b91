use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read-only handle over the host's settings blob.
///
/// The host populates a `plugins.<id>` namespace for every registered plugin
/// before the pre-render hooks run; persistence stays on the host side.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsViewModel {
    root: Value,
}

impl SettingsViewModel {
    pub fn new(root: Value) -> Self {
        SettingsViewModel { root }
    }

    /// The raw `plugins.<id>` namespace, if the host populated it.
    pub fn plugin(&self, id: &str) -> Option<&Value> {
        self.root.get("plugins")?.get(id)
    }

    /// Typed view of a plugin's namespace. Missing keys fall back to the
    /// defaults; a namespace that fails to decode reads as absent.
    pub fn plugin_settings(&self, id: &str) -> Option<PluginSettings> {
        let namespace = self.plugin(id)?;
        match serde_json::from_value(namespace.clone()) {
            Ok(settings) => Some(settings),
            Err(err) => {
                log::debug!("settings namespace plugins.{id} failed to decode: {err}");
                None
            }
        }
    }
}

/// This plugin's settings namespace: which of the two readings to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginSettings {
    pub display_raspi_temp: bool,
    pub display_air_temp: bool,
}

impl Default for PluginSettings {
    fn default() -> Self {
        PluginSettings {
            display_raspi_temp: true,
            display_air_temp: true,
        }
    }
}
