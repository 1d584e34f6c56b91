// Navbartemp: temperature display view-model for a printer host web UI
// Copyright 2026

mod format;
mod message;
mod model;
mod registry;
mod settings;
mod temperature;

pub use format::{format_air_temperature, format_bar_temperature, format_host_temperature};
pub use message::{PluginMessage, StatusPayload};
pub use model::{DisplayState, TemperatureDisplayModel};
pub use registry::{PushListener, ViewModelRegistry, ViewModelSpec};
pub use settings::{PluginSettings, SettingsViewModel};
pub use temperature::{HeatZone, TemperatureViewModel};

/// Identifier under which this plugin's push messages and settings namespace
/// are keyed.
pub const PLUGIN_ID: &str = "navbartemp";
