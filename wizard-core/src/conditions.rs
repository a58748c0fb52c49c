/// Fixed category set for the upstream primary weather keyword
/// (`weather[0].main`), plus the icon identifier and accent color each one
/// maps to for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Haze,
    Fog,
    Smoke,
    Dust,
    Tornado,
    /// Any keyword outside the table. Renders with a neutral icon and color
    /// instead of failing the lookup.
    Other,
}

impl Condition {
    /// Map the upstream keyword to a category. Unrecognized keywords fall
    /// back to [`Condition::Other`].
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Rain" => Condition::Rain,
            "Drizzle" => Condition::Drizzle,
            "Thunderstorm" => Condition::Thunderstorm,
            "Snow" => Condition::Snow,
            "Mist" => Condition::Mist,
            "Haze" => Condition::Haze,
            "Fog" => Condition::Fog,
            "Smoke" => Condition::Smoke,
            "Dust" => Condition::Dust,
            "Tornado" => Condition::Tornado,
            _ => Condition::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Drizzle => "Drizzle",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Snow => "Snow",
            Condition::Mist => "Mist",
            Condition::Haze => "Haze",
            Condition::Fog => "Fog",
            Condition::Smoke => "Smoke",
            Condition::Dust => "Dust",
            Condition::Tornado => "Tornado",
            Condition::Other => "Unknown",
        }
    }

    /// Display icon identifier (MaterialCommunityIcons naming).
    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Clear => "weather-sunny",
            Condition::Clouds => "weather-cloudy",
            Condition::Rain => "weather-rainy",
            Condition::Drizzle => "weather-partly-rainy",
            Condition::Thunderstorm => "weather-lightning",
            Condition::Snow => "weather-snowy",
            Condition::Mist => "weather-fog",
            Condition::Haze => "weather-hazy",
            Condition::Fog => "weather-fog",
            Condition::Smoke => "weather-fog",
            Condition::Dust => "weather-dust",
            Condition::Tornado => "weather-tornado",
            Condition::Other => "weather-partly-cloudy",
        }
    }

    /// Accent color used alongside the icon.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Condition::Clear => "#f7b733",
            Condition::Clouds => "#808e9b",
            Condition::Rain => "#0080ff",
            Condition::Drizzle => "#3498db",
            Condition::Thunderstorm => "#616161",
            Condition::Snow => "#87cefa",
            Condition::Mist => "#9e9e9e",
            Condition::Haze => "#d2b48c",
            Condition::Fog => "#9e9e9e",
            Condition::Smoke => "#848482",
            Condition::Dust => "#c2b280",
            Condition::Tornado => "#555555",
            Condition::Other => "#9e9e9e",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[
            Condition::Clear,
            Condition::Clouds,
            Condition::Rain,
            Condition::Drizzle,
            Condition::Thunderstorm,
            Condition::Snow,
            Condition::Mist,
            Condition::Haze,
            Condition::Fog,
            Condition::Smoke,
            Condition::Dust,
            Condition::Tornado,
        ]
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_roundtrip_for_known_conditions() {
        for condition in Condition::all() {
            let parsed = Condition::from_keyword(condition.as_str());
            assert_eq!(*condition, parsed);
        }
    }

    #[test]
    fn unknown_keyword_falls_back_to_neutral() {
        let condition = Condition::from_keyword("NoSuchWeather");
        assert_eq!(condition, Condition::Other);
        assert_eq!(condition.icon(), "weather-partly-cloudy");
        assert_eq!(condition.accent_color(), "#9e9e9e");
    }

    #[test]
    fn every_condition_has_icon_and_color() {
        for condition in Condition::all() {
            assert!(condition.icon().starts_with("weather-"));
            assert!(condition.accent_color().starts_with('#'));
        }
    }
}
