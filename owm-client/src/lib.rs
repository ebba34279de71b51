//! OpenWeatherMap "current weather" API client
//!
//! This crate wraps the provider's HTTP endpoint behind a typed interface,
//! allowing the main startpage application to stay free of request-building
//! and payload-decoding concerns. It has no UI dependency.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when fetching current weather.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather provider returned HTTP {code}")]
    Status { code: u16 },

    #[error("malformed weather payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weather payload contained no conditions")]
    MissingCondition,
}

/// Unit system passed to the provider and reflected in rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Value of the `units` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    /// Temperature suffix for display ("standard" is Kelvin).
    pub fn suffix(self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }
}

/// A decoded current-weather reading.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub description: String,
    pub temperature: f64,
}

impl CurrentWeather {
    /// Temperature rounded to zero decimals with the unit suffix, e.g. "22 °C".
    pub fn temperature_label(&self, units: Units) -> String {
        format!("{:.0} {}", self.temperature, units.suffix())
    }
}

// Provider payload shape: { weather: [{ description }], main: { temp } }
#[derive(Deserialize)]
struct WeatherPayload {
    weather: Vec<Condition>,
    main: MainReadings,
}

#[derive(Deserialize)]
struct Condition {
    description: String,
}

#[derive(Deserialize)]
struct MainReadings {
    temp: f64,
}

pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    location: String,
    units: Units,
}

impl WeatherClient {
    pub fn new(
        api_key: impl Into<String>,
        location: impl Into<String>,
        units: Units,
    ) -> Result<Self, WeatherError> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, location, units)
    }

    /// Like [`WeatherClient::new`] but against a custom provider URL.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        location: impl Into<String>,
        units: Units,
    ) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            location: location.into(),
            units,
        })
    }

    /// Fetch the current weather for the configured location.
    pub async fn current(&self) -> Result<CurrentWeather, WeatherError> {
        let response = self
            .http
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&[
                ("appid", self.api_key.as_str()),
                ("q", self.location.as_str()),
                ("units", self.units.query_value()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text().await?;
        decode(&body)
    }
}

fn decode(body: &str) -> Result<CurrentWeather, WeatherError> {
    let payload: WeatherPayload = serde_json::from_str(body)?;
    let condition = payload
        .weather
        .into_iter()
        .next()
        .ok_or(WeatherError::MissingCondition)?;

    Ok(CurrentWeather {
        description: condition.description,
        temperature: payload.main.temp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_payload() {
        let body = r#"{"weather":[{"description":"clear sky"}],"main":{"temp":21.6}}"#;
        let weather = decode(body).unwrap();
        assert_eq!(weather.description, "clear sky");
        assert_eq!(weather.temperature, 21.6);
    }

    #[test]
    fn ignores_extra_payload_fields() {
        let body = r#"{
            "coord": {"lon": 18.65, "lat": 54.35},
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "main": {"temp": 21.6, "feels_like": 21.1, "pressure": 1015, "humidity": 52},
            "name": "Gdansk"
        }"#;
        let weather = decode(body).unwrap();
        assert_eq!(weather.description, "clear sky");
    }

    #[test]
    fn rejects_empty_conditions() {
        let body = r#"{"weather":[],"main":{"temp":21.6}}"#;
        assert!(matches!(decode(body), Err(WeatherError::MissingCondition)));
    }

    #[test]
    fn rejects_malformed_payload() {
        let body = r#"{"weather":"oops"}"#;
        assert!(matches!(decode(body), Err(WeatherError::Decode(_))));
    }

    #[test]
    fn rounds_temperature_for_display() {
        let weather = CurrentWeather {
            description: "clear sky".to_string(),
            temperature: 21.6,
        };
        assert_eq!(weather.temperature_label(Units::Metric), "22 °C");
        assert_eq!(weather.temperature_label(Units::Imperial), "22 °F");
    }

    #[test]
    fn units_map_to_query_values() {
        assert_eq!(Units::Metric.query_value(), "metric");
        assert_eq!(Units::Imperial.query_value(), "imperial");
        assert_eq!(Units::Standard.query_value(), "standard");
        assert_eq!(Units::Standard.suffix(), "K");
    }
}
