//! Recent disaster events from the Ambee feed.
//!
//! Queries the latest events near the region center, filtered by hazard
//! type, and annotates each report with its great-circle distance so the
//! engine can apply the qualifying-radius rule.

use async_trait::async_trait;
use serde::Deserialize;

use risk_engine::normalize::EVENT_RADIUS_KM;
use risk_engine::{haversine_km, EventReport, EventSignal, HazardType, Region};

use crate::hub::EventSource;
use crate::SourceError;

const AMBEE_URL: &str = "https://api.ambeedata.com/disasters/latest/by-lat-lng";

/// Severity the feed implies when it omits the field.
const DEFAULT_SEVERITY: f64 = 1.0;

/// Ambee disasters API client. Without an API key every fetch fails fast
/// with `MissingCredential` and the caller substitutes the baseline.
pub struct EventFeedClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AmbeeResponse {
    #[serde(default)]
    data: Vec<AmbeeEvent>,
}

#[derive(Debug, Deserialize)]
struct AmbeeEvent {
    #[serde(default)]
    severity: Option<f64>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lng: Option<f64>,
    #[serde(default)]
    event_type: Option<String>,
}

impl EventFeedClient {
    pub fn new(client: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: AMBEE_URL.to_string(),
            api_key,
        }
    }

    pub async fn fetch_latest(
        &self,
        region: &Region,
        hazard: &HazardType,
    ) -> Result<EventSignal, SourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SourceError::MissingCredential("AMBEE_KEY"))?;

        let response = self
            .client
            .get(&self.base_url)
            .header("x-api-key", api_key)
            .query(&[
                ("lat", region.latitude.to_string()),
                ("lng", region.longitude.to_string()),
                ("eventType", hazard.label().to_uppercase()),
                ("limit", "5".to_string()),
            ])
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::ApiStatus(response.status().as_u16()));
        }

        let data: AmbeeResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(signal_from_feed(region, data))
    }
}

fn signal_from_feed(region: &Region, response: AmbeeResponse) -> EventSignal {
    let events: Vec<EventReport> = response
        .data
        .into_iter()
        .map(|e| {
            // The feed is already proximity-filtered; an event without a
            // coordinate is treated as at the region center.
            let distance_km = match (e.lat, e.lng) {
                (Some(lat), Some(lng)) => {
                    haversine_km(region.latitude, region.longitude, lat, lng)
                }
                _ => 0.0,
            };
            EventReport {
                severity: e.severity.unwrap_or(DEFAULT_SEVERITY),
                distance_km,
                event_type: e.event_type,
            }
        })
        .collect();

    let alert = events.iter().any(|e| e.distance_km <= EVENT_RADIUS_KM);

    EventSignal { events, alert }
}

#[async_trait]
impl EventSource for EventFeedClient {
    async fn fetch_events(
        &self,
        region: &Region,
        hazard: &HazardType,
    ) -> Result<EventSignal, SourceError> {
        self.fetch_latest(region, hazard).await
    }
}
