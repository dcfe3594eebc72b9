//! Risk prediction routes.
//!
//! The prediction handler owns the request-time control flow: region lookup,
//! hazard parsing, the geographic eligibility short-circuit (ahead of any
//! external fetch), signal gathering, and fusion.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use hazard_signals::SignalHub;
use risk_engine::{
    assess, assess_ineligible, is_applicable, HazardType, Region, RiskAssessment, RiskConfig,
    WeatherSnapshot,
};

use crate::AppState;

#[derive(Deserialize)]
pub struct PredictParams {
    /// Hazard label, e.g. "flood". Unknown labels are handled as a generic
    /// hazard, not rejected.
    pub disaster_type: String,
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub risk_percentage: f64,
    pub risk_level: &'static str,
    pub confidence: f64,
    pub semantic_score: f64,
    pub weather: WeatherEcho,
    pub recommendations: Vec<String>,
    pub details: Details,
}

/// Weather snapshot echoed back with the documented defaults applied, so
/// clients always see concrete numbers.
#[derive(Serialize)]
pub struct WeatherEcho {
    pub temperature: f64,
    pub humidity: f64,
    pub precipitation: f64,
    pub wind_speed: f64,
}

impl WeatherEcho {
    fn from_snapshot(wx: &WeatherSnapshot) -> Self {
        Self {
            temperature: wx.temperature_or_default(),
            humidity: wx.humidity_or_default(),
            precipitation: wx.precipitation_or_default(),
            wind_speed: wx.wind_speed_or_default(),
        }
    }
}

#[derive(Serialize)]
pub struct Details {
    pub sources: String,
    pub calculation_time: String,
}

#[derive(Serialize)]
pub struct RegionInfo {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub coastal: bool,
    pub seismic_zone_rank: Option<u8>,
}

pub struct PredictionOutcome {
    pub assessment: RiskAssessment,
    pub weather: WeatherSnapshot,
}

/// Assess one (region, hazard) request.
///
/// An ineligible pairing returns before `gather` runs, so no external source
/// is invoked and no paid API is charged; the echoed weather is the
/// documented default snapshot.
pub async fn run_prediction(
    region: &Region,
    hazard: &HazardType,
    hub: &SignalHub,
    config: &RiskConfig,
) -> PredictionOutcome {
    if !is_applicable(region, hazard) {
        return PredictionOutcome {
            assessment: assess_ineligible(region, hazard),
            weather: WeatherSnapshot::fallback(),
        };
    }

    let bundle = hub.gather(region, hazard).await;
    let weather = bundle.weather.value().clone();

    PredictionOutcome {
        assessment: assess(region, hazard, &bundle, config),
        weather,
    }
}

pub async fn predict(
    State(state): State<AppState>,
    Path(region_name): Path<String>,
    Query(params): Query<PredictParams>,
) -> Result<Json<PredictResponse>, (StatusCode, String)> {
    let region = state
        .regions
        .get(&region_name)
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    let hazard = HazardType::parse(&params.disaster_type);
    let outcome = run_prediction(region, &hazard, &state.hub, &state.config).await;
    let assessment = outcome.assessment;

    Ok(Json(PredictResponse {
        risk_percentage: assessment.risk_percentage,
        risk_level: assessment.risk_level.as_str(),
        confidence: assessment.confidence,
        semantic_score: assessment.semantic_score,
        weather: WeatherEcho::from_snapshot(&outcome.weather),
        recommendations: assessment.recommendations,
        details: Details {
            sources: assessment.provenance.summary(),
            calculation_time: chrono::Utc::now().to_rfc3339(),
        },
    }))
}

pub async fn list_regions(State(state): State<AppState>) -> Json<Vec<RegionInfo>> {
    let mut regions: Vec<RegionInfo> = state
        .regions
        .iter()
        .map(|r| RegionInfo {
            name: r.name.clone(),
            latitude: r.latitude,
            longitude: r.longitude,
            coastal: r.coastal,
            seismic_zone_rank: r.seismic_zone_rank,
        })
        .collect();
    regions.sort_by(|a, b| a.name.cmp(&b.name));
    Json(regions)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}
