//! Live weather from Open-Meteo (free, no API key).
//!
//! Queries the hourly forecast and takes the latest hour of each series.
//! Fields the payload lacks stay `None` in the snapshot; the engine resolves
//! absence against its documented defaults.

use async_trait::async_trait;
use serde::Deserialize;

use risk_engine::{Region, WeatherSnapshot};

use crate::hub::WeatherSource;
use crate::SourceError;

const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Open-Meteo hourly forecast client.
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    #[serde(default)]
    hourly: OpenMeteoHourly,
}

#[derive(Debug, Default, Deserialize)]
struct OpenMeteoHourly {
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    precipitation: Vec<Option<f64>>,
    #[serde(default)]
    relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    wind_speed_10m: Vec<Option<f64>>,
}

impl WeatherClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: OPEN_METEO_URL.to_string(),
        }
    }

    pub async fn fetch_current(&self, region: &Region) -> Result<WeatherSnapshot, SourceError> {
        let url = format!(
            "{}?latitude={:.4}&longitude={:.4}&hourly=temperature_2m,precipitation,relative_humidity_2m,wind_speed_10m&forecast_days=1&timezone=auto",
            self.base_url, region.latitude, region.longitude
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::ApiStatus(response.status().as_u16()));
        }

        let data: OpenMeteoResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(snapshot_from_hourly(&data.hourly))
    }
}

/// Latest hour of each series, rounded to one decimal.
fn snapshot_from_hourly(hourly: &OpenMeteoHourly) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_c: latest(&hourly.temperature_2m),
        humidity_pct: latest(&hourly.relative_humidity_2m),
        precipitation_mm: latest(&hourly.precipitation),
        wind_speed_kmh: latest(&hourly.wind_speed_10m),
    }
}

fn latest(series: &[Option<f64>]) -> Option<f64> {
    series
        .iter()
        .rev()
        .find_map(|v| *v)
        .map(|v| (v * 10.0).round() / 10.0)
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn fetch_weather(&self, region: &Region) -> Result<WeatherSnapshot, SourceError> {
        self.fetch_current(region).await
    }
}
