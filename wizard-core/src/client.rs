use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{
    conditions::Condition,
    config::Config,
    error::FetchError,
    model::WeatherReading,
    units::capitalize_first,
};

const API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Client for the upstream current-weather endpoint.
///
/// Side-effect free beyond the HTTP call itself: recording a successful
/// lookup in the recents list is the caller's job.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { api_key, http })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?.to_owned();
        Self::new(api_key, config.request_timeout())
    }

    /// Look up current conditions for `location_query`.
    ///
    /// The query is trimmed before use. An empty trimmed query is still sent
    /// upstream; callers must not record its result as a recent search.
    pub async fn fetch_weather(&self, location_query: &str) -> Result<WeatherReading, FetchError> {
        let query = location_query.trim();
        debug!(%query, "requesting current weather");

        let res = self
            .http
            .get(API_URL)
            .query(&[
                ("q", query),
                ("units", "imperial"),
                ("APPID", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::unreachable(e.to_string()))?;

        // The upstream reports errors through the `cod` field of the body,
        // so the body is classified regardless of the HTTP status line.
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::unreachable(e.to_string()))?;

        let envelope: RawEnvelope = serde_json::from_str(&body)
            .map_err(|e| FetchError::malformed(format!("invalid JSON: {e}")))?;

        classify(envelope)
    }
}

/// Raw upstream payload. Every field is optional so that error bodies and
/// success bodies deserialize through the same type; `classify` decides what
/// the shape means.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    cod: Option<Cod>,
    message: Option<String>,
    name: Option<String>,
    sys: Option<RawSys>,
    main: Option<RawMain>,
    weather: Option<Vec<RawWeather>>,
    wind: Option<RawWind>,
    clouds: Option<RawClouds>,
    dt: Option<i64>,
}

/// The status-like `cod` field arrives as a number on success and as a
/// string on some errors. Both forms are accepted for every check.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Cod {
    Number(i64),
    Text(String),
}

impl Cod {
    fn matches(&self, code: i64) -> bool {
        match self {
            Cod::Number(n) => *n == code,
            Cod::Text(s) => s.parse::<i64>().is_ok_and(|n| n == code),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct RawWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct RawWind {
    speed: f64,
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct RawClouds {
    all: u8,
}

/// Classify an upstream envelope, in priority order: credential failure,
/// not-found, well-formed conditions payload, then malformed as the
/// fallback for any other shape.
fn classify(raw: RawEnvelope) -> Result<WeatherReading, FetchError> {
    let RawEnvelope { cod, message, name, sys, main, weather, wind, clouds, dt } = raw;

    if let Some(cod) = &cod {
        if cod.matches(401) {
            return Err(FetchError::InvalidCredential { message });
        }
        if cod.matches(404) {
            return Err(FetchError::NotFound { message });
        }
    }

    let (Some(name), Some(sys), Some(main), Some(weather), Some(wind), Some(clouds)) =
        (name, sys, main, weather, wind, clouds)
    else {
        return Err(FetchError::malformed("missing primary conditions payload"));
    };

    let Some(primary) = weather.first() else {
        return Err(FetchError::malformed("weather list was empty"));
    };

    let observed_at = dt
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
        .unwrap_or_else(Utc::now);

    Ok(WeatherReading {
        city: name,
        country: sys.country,
        temp_f: main.temp,
        feels_like_f: main.feels_like,
        temp_min_f: main.temp_min,
        temp_max_f: main.temp_max,
        condition: Condition::from_keyword(&primary.main),
        description: capitalize_first(&primary.description),
        humidity_pct: main.humidity,
        pressure_hpa: main.pressure,
        cloudiness_pct: clouds.all,
        wind_speed_mph: wind.speed,
        wind_deg: wind.deg.rem_euclid(360.0).round() as u16 % 360,
        observed_at,
    })
}
