use std::rc::Rc;

use log::debug;
use serde_json::Value;

use crate::format::{format_air_temperature, format_host_temperature};
use crate::message::StatusPayload;
use crate::registry::{PushListener, ViewModelSpec};
use crate::settings::{PluginSettings, SettingsViewModel};
use crate::temperature::TemperatureViewModel;
use crate::PLUGIN_ID;

/// Display values owned by [`TemperatureDisplayModel`], mutated only on
/// message receipt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    /// Set iff the most recent own-plugin message carried the host marker.
    /// The rendering layer gates the host temperature on this flag, never on
    /// the text alone.
    pub host_present: bool,
    pub host_temperature_text: Option<String>,
    pub air_temperature_text: Option<String>,
}

type RenderCallback = Box<dyn Fn(&DisplayState)>;

/// View-model behind the navbar and settings-panel temperature fragments.
///
/// Receives every push-channel message, claims the ones addressed to
/// [`PLUGIN_ID`] and publishes the refreshed [`DisplayState`] to its
/// subscribers.
pub struct TemperatureDisplayModel {
    temperature: Rc<TemperatureViewModel>,
    global_settings: Rc<SettingsViewModel>,
    settings: Option<PluginSettings>,
    state: DisplayState,
    subscribers: Vec<RenderCallback>,
}

impl TemperatureDisplayModel {
    /// Collaborators arrive in registration order: the host's temperature
    /// view-model first, the global settings view-model second.
    pub fn new(
        temperature: Rc<TemperatureViewModel>,
        global_settings: Rc<SettingsViewModel>,
    ) -> Self {
        TemperatureDisplayModel {
            temperature,
            global_settings,
            settings: None,
            state: DisplayState::default(),
            subscribers: Vec::new(),
        }
    }

    /// Registration tuple for the composition root.
    pub fn spec() -> ViewModelSpec {
        ViewModelSpec {
            dependencies: &["temperatureViewModel", "settingsViewModel"],
            anchors: &["#navbar_plugin_navbartemp", "#settings_plugin_navbartemp"],
        }
    }

    /// Register a render callback, invoked with the state after every
    /// handled own-plugin message.
    pub fn subscribe(&mut self, callback: impl Fn(&DisplayState) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// The host's temperature view-model, as injected at construction.
    pub fn temperature_view_model(&self) -> &TemperatureViewModel {
        &self.temperature
    }

    /// Plugin settings captured by [`Self::on_before_binding`], if any.
    pub fn settings(&self) -> Option<&PluginSettings> {
        self.settings.as_ref()
    }

    /// Pre-render hook, invoked once before the first bind. Captures this
    /// plugin's settings namespace; the host populates `plugins.navbartemp`
    /// before the hook runs.
    pub fn on_before_binding(&mut self) {
        self.settings = self.global_settings.plugin_settings(PLUGIN_ID);
        if self.settings.is_none() {
            debug!("settings namespace plugins.{PLUGIN_ID} is missing");
        }
    }

    fn apply(&mut self, payload: &StatusPayload) {
        if !payload.has_host_marker() {
            // Markerless messages reset the flag without inspecting either
            // temperature; a stale host text may linger but the flag keeps
            // it off screen.
            self.state.host_present = false;
            return;
        }

        self.state.host_present = true;
        if let Some(value) = payload.raspi_temp {
            self.state.host_temperature_text = Some(format_host_temperature(value));
        }
        if let Some(value) = payload.air_temp {
            self.state.air_temperature_text = Some(format_air_temperature(value));
        }
    }

    fn publish(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }
}

impl PushListener for TemperatureDisplayModel {
    fn on_plugin_message(&mut self, plugin: &str, data: &Value) {
        if plugin != PLUGIN_ID {
            return;
        }

        let payload = match serde_json::from_value::<StatusPayload>(data.clone()) {
            Ok(payload) => payload,
            Err(err) => {
                debug!("undecodable {PLUGIN_ID} payload treated as empty: {err}");
                StatusPayload::default()
            }
        };

        self.apply(&payload);
        self.publish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    fn bound_model() -> TemperatureDisplayModel {
        let temperature = Rc::new(TemperatureViewModel::default());
        let settings = Rc::new(SettingsViewModel::new(json!({
            "plugins": {
                "navbartemp": { "displayRaspiTemp": true, "displayAirTemp": true }
            }
        })));

        let mut model = TemperatureDisplayModel::new(temperature, settings);
        model.on_before_binding();
        model
    }

    #[test]
    fn test_foreign_plugin_messages_are_a_no_op() {
        let mut model = bound_model();
        model.on_plugin_message(
            "navbartemp",
            &json!({ "israspi": true, "raspitemp": 48.2, "airtemp": 21.5 }),
        );
        let before = model.state().clone();

        model.on_plugin_message(
            "psucontrol",
            &json!({ "israspi": false, "raspitemp": 99.9, "airtemp": 99.9 }),
        );

        assert_eq!(model.state(), &before);
    }

    #[test]
    fn test_missing_host_marker_resets_flag_only() {
        let mut model = bound_model();
        model.on_plugin_message(
            "navbartemp",
            &json!({ "israspi": true, "raspitemp": 48.2, "airtemp": 21.5 }),
        );

        model.on_plugin_message("navbartemp", &json!({ "raspitemp": 51.0, "airtemp": 30.0 }));

        let state = model.state();
        assert!(!state.host_present);
        // neither temperature is inspected on a markerless message
        assert_eq!(state.host_temperature_text.as_deref(), Some("Raspi: 48.2°C"));
        assert_eq!(state.air_temperature_text.as_deref(), Some("Luft: 21.5°C"));
    }

    #[test]
    fn test_host_temperature_renders_with_one_decimal() {
        let mut model = bound_model();

        model.on_plugin_message("navbartemp", &json!({ "israspi": true, "raspitemp": 48.0 }));

        let state = model.state();
        assert!(state.host_present);
        assert_eq!(state.host_temperature_text.as_deref(), Some("Raspi: 48.0°C"));
        assert_eq!(state.air_temperature_text, None);
    }

    #[test]
    fn test_air_temperature_renders_verbatim() {
        let mut model = bound_model();

        model.on_plugin_message("navbartemp", &json!({ "israspi": true, "airtemp": 21.5 }));
        assert_eq!(model.state().air_temperature_text.as_deref(), Some("Luft: 21.5°C"));

        model.on_plugin_message("navbartemp", &json!({ "israspi": true, "airtemp": 22.0 }));
        assert_eq!(model.state().air_temperature_text.as_deref(), Some("Luft: 22°C"));
    }

    #[test]
    fn test_temperatures_update_independently() {
        let mut model = bound_model();

        model.on_plugin_message("navbartemp", &json!({ "israspi": true, "raspitemp": 48.2 }));
        model.on_plugin_message("navbartemp", &json!({ "israspi": true, "airtemp": 21.5 }));

        let state = model.state();
        assert_eq!(state.host_temperature_text.as_deref(), Some("Raspi: 48.2°C"));
        assert_eq!(state.air_temperature_text.as_deref(), Some("Luft: 21.5°C"));
    }

    #[test]
    fn test_identical_messages_are_idempotent() {
        let mut model = bound_model();
        let data = json!({ "israspi": true, "raspitemp": 48.2, "airtemp": 21.5 });

        model.on_plugin_message("navbartemp", &data);
        let first = model.state().clone();

        model.on_plugin_message("navbartemp", &data);
        assert_eq!(model.state(), &first);
    }

    #[test]
    fn test_undecodable_payload_behaves_like_empty() {
        let mut model = bound_model();
        model.on_plugin_message(
            "navbartemp",
            &json!({ "israspi": true, "raspitemp": 48.2, "airtemp": 21.5 }),
        );

        model.on_plugin_message("navbartemp", &json!({ "israspi": true, "raspitemp": "48.2" }));

        let state = model.state();
        assert!(!state.host_present);
        assert_eq!(state.host_temperature_text.as_deref(), Some("Raspi: 48.2°C"));
        assert_eq!(state.air_temperature_text.as_deref(), Some("Luft: 21.5°C"));
    }

    #[test]
    fn test_empty_payload_clears_host_flag() {
        // the host broadcasts an empty payload when both displays are
        // disabled in the settings
        let mut model = bound_model();
        model.on_plugin_message("navbartemp", &json!({ "israspi": true, "raspitemp": 48.2 }));

        model.on_plugin_message("navbartemp", &json!({}));

        assert!(!model.state().host_present);
    }

    #[test]
    fn test_subscribers_see_every_handled_message() {
        let mut model = bound_model();
        let published: Rc<RefCell<Vec<DisplayState>>> = Rc::default();
        let sink = Rc::clone(&published);
        model.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        model.on_plugin_message("navbartemp", &json!({ "israspi": true, "airtemp": 21.5 }));
        model.on_plugin_message("psucontrol", &json!({ "isPSUOn": true }));
        model.on_plugin_message("navbartemp", &json!({}));

        let published = published.borrow();
        assert_eq!(published.len(), 2);
        assert!(published[0].host_present);
        assert_eq!(published[0].air_temperature_text.as_deref(), Some("Luft: 21.5°C"));
        assert!(!published[1].host_present);
    }

    #[test]
    fn test_before_binding_captures_plugin_settings() {
        let model = bound_model();
        assert_eq!(model.settings(), Some(&PluginSettings::default()));

        let temperature = Rc::new(TemperatureViewModel::default());
        let empty = Rc::new(SettingsViewModel::new(json!({})));
        let mut unbound = TemperatureDisplayModel::new(temperature, empty);
        unbound.on_before_binding();
        assert_eq!(unbound.settings(), None);
    }
}
