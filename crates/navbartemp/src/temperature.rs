use crate::format::format_bar_temperature;

/// One heat zone as reported by the host's temperature view-model.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatZone {
    pub name: String,
    pub actual: f64,
    pub target: Option<f64>,
}

/// Collaborator handle for the host's own temperature view-model.
///
/// The navbar plugin stores the handle at construction; sibling widgets use
/// it to render the printer's heat zones with the shared bar formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureViewModel {
    zones: Vec<HeatZone>,
}

impl TemperatureViewModel {
    pub fn new(zones: Vec<HeatZone>) -> Self {
        TemperatureViewModel { zones }
    }

    pub fn zones(&self) -> &[HeatZone] {
        &self.zones
    }

    /// Navbar text for every zone, in reporting order.
    pub fn bar_texts(&self) -> Vec<String> {
        self.zones
            .iter()
            .map(|zone| format_bar_temperature(&zone.name, zone.actual, zone.target))
            .collect()
    }
}
