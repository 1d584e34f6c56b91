use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope for one push-channel frame.
///
/// The channel is shared by every plugin on the page: `plugin` names the
/// producer, `data` stays untyped until a listener claims the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginMessage {
    pub plugin: String,
    pub data: Value,
}

/// Payload schema for this plugin's own messages.
///
/// Every field is optional; the producer omits whatever it did not sample
/// this cycle. `israspi` doubles as the host-presence marker: its presence,
/// not its value, signals a host-device-aware feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusPayload {
    #[serde(rename = "israspi", skip_serializing_if = "Option::is_none")]
    pub is_raspi: Option<bool>,
    #[serde(rename = "raspitemp", skip_serializing_if = "Option::is_none")]
    pub raspi_temp: Option<f64>,
    #[serde(rename = "airtemp", skip_serializing_if = "Option::is_none")]
    pub air_temp: Option<f64>,
}

impl StatusPayload {
    /// True when the message came from a host-device-aware build.
    pub fn has_host_marker(&self) -> bool {
        self.is_raspi.is_some()
    }
}
