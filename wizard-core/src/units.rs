//! Unit conversion and display formatting shared by every surface that
//! renders a reading.
//!
//! All displayed numbers go through [`round_display`], which uses
//! `f64::round` (round half away from zero), so Fahrenheit, Celsius and wind
//! speed are rounded consistently.

/// Display unit system. Fahrenheit pairs with MPH, Celsius with KPH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    #[default]
    Fahrenheit,
    Celsius,
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn mph_to_kph(mph: f64) -> f64 {
    mph / 1.6
}

/// Rounding applied to every displayed number: half away from zero.
pub fn round_display(value: f64) -> i64 {
    value.round() as i64
}

/// Format a stored Fahrenheit temperature in the requested unit, e.g.
/// `"70°F"` or `"21°C"`.
pub fn format_temp(fahrenheit: f64, unit: UnitSystem) -> String {
    match unit {
        UnitSystem::Fahrenheit => format!("{}°F", round_display(fahrenheit)),
        UnitSystem::Celsius => format!("{}°C", round_display(fahrenheit_to_celsius(fahrenheit))),
    }
}

/// Format a stored MPH wind speed in the requested unit system.
pub fn format_wind(mph: f64, unit: UnitSystem) -> String {
    match unit {
        UnitSystem::Fahrenheit => format!("{} MPH", round_display(mph)),
        UnitSystem::Celsius => format!("{} KPH", round_display(mph_to_kph(mph))),
    }
}

/// Uppercase the first character, leave the rest unchanged. Empty input
/// stays empty.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Compass label for a wind direction in degrees. Eight 45° sectors, each
/// centered on its label; degrees are normalized modulo 360.
pub fn compass_direction(degrees: u16) -> &'static str {
    const LABELS: [&str; 8] = [
        "North",
        "North East",
        "East",
        "South East",
        "South",
        "South West",
        "West",
        "North West",
    ];

    let normalized = f64::from(degrees % 360);
    let sector = (((normalized + 22.5) / 45.0).floor() as usize) % LABELS.len();
    LABELS[sector]
}
