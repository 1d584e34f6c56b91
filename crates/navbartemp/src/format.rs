/// Formats a heat zone reading for the navigation bar.
///
/// Shared with sibling widgets that render the printer's own heat zones.
/// Produces `"{label}: {actual}°C"` with one decimal, extended with an arrow
/// and the target value while a target is active: up-right while the zone
/// heats towards the target, down-right while it cools. A zero target means
/// the heater is off and renders no suffix.
pub fn format_bar_temperature(label: &str, actual: f64, target: Option<f64>) -> String {
    let mut output = format!("{label}: {actual:.1}°C");

    if let Some(target) = target.filter(|target| *target != 0.0) {
        let sign = if target >= actual { '\u{21D7}' } else { '\u{21D8}' };
        output.push_str(&format!(" {sign} {target:.1}°C"));
    }

    output
}

/// Display text for the host device's SoC temperature.
pub fn format_host_temperature(value: f64) -> String {
    format!("Raspi: {value:.1}°C")
}

/// Display text for the enclosure air temperature.
///
/// Renders with the value's natural precision; the feed delivers the air
/// reading already rounded.
pub fn format_air_temperature(value: f64) -> String {
    format!("Luft: {value}°C")
}
