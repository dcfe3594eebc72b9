//! Signal normalization: each raw source value becomes a [0, 100] risk
//! contribution. Inputs outside physical bounds are clamped, never allowed
//! to propagate as NaN or negative risk.

use std::cmp::Ordering;

use crate::hazard::HazardType;
use crate::region::Region;
use crate::signal::{EventSignal, SemanticSignal, WeatherSnapshot};

/// Baseline event score, also the fallback when the feed is unavailable.
pub const EVENT_BASELINE: f64 = 30.0;
/// Score added per unit of severity for each contributing event.
pub const EVENT_SEVERITY_WEIGHT: f64 = 15.0;
/// Event score ceiling.
pub const EVENT_SCORE_CAP: f64 = 95.0;
/// How many of the most severe qualifying events contribute.
pub const MAX_CONTRIBUTING_EVENTS: usize = 3;
/// Default proximity radius for an event to qualify, km.
pub const EVENT_RADIUS_KM: f64 = 200.0;
/// Weather score for hazards without a weather model.
pub const NEUTRAL_WEATHER_SCORE: f64 = 30.0;
/// Earthquake weather score when a region has no seismic zone rank.
pub const SEISMIC_FLAT_SCORE: f64 = 40.0;

/// Event feed normalization: baseline plus `severity x 15` for each of the
/// up-to-3 most severe events within `radius_km`, capped at 95.
pub fn normalize_event(signal: &EventSignal, radius_km: f64) -> f64 {
    let mut severities: Vec<f64> = signal
        .events
        .iter()
        .filter(|e| e.distance_km <= radius_km)
        .map(|e| e.severity.max(0.0))
        .collect();
    severities.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    let contribution: f64 = severities
        .iter()
        .take(MAX_CONTRIBUTING_EVENTS)
        .map(|s| s * EVENT_SEVERITY_WEIGHT)
        .sum();

    (EVENT_BASELINE + contribution)
        .min(EVENT_SCORE_CAP)
        .clamp(0.0, 100.0)
}

/// Weather normalization, dispatched per hazard.
///
/// Missing fields resolve to the documented defaults. For flood, a payload
/// that genuinely lacks humidity drops the humidity term instead of
/// inventing one. Region multipliers apply after the hazard formula.
pub fn normalize_weather(weather: &WeatherSnapshot, hazard: &HazardType, region: &Region) -> f64 {
    let precip = weather.precipitation_or_default().max(0.0);

    let score = match hazard {
        HazardType::Flood => {
            let base = match weather.humidity_pct {
                Some(humidity) => (precip * 20.0 + humidity.max(0.0)).min(80.0),
                None => (precip * 20.0).min(80.0),
            };
            base * region.flood_prone_multiplier
        }
        HazardType::Heatwave => {
            let temp = weather.temperature_or_default();
            ((temp - 38.0) * 8.0).max(0.0) * region.heat_prone_multiplier
        }
        HazardType::Earthquake => match region.seismic_zone_rank {
            Some(rank) => f64::from(rank.min(100)),
            None => SEISMIC_FLAT_SCORE,
        },
        HazardType::Cyclone => {
            // Only reached when the eligibility filter passed.
            let wind = weather.wind_speed_or_default().max(0.0);
            (wind * 6.0).min(80.0).max(region.cyclone_base_risk)
        }
        HazardType::Landslide => (precip * 20.0).min(70.0) * region.landslide_prone_multiplier,
        HazardType::Other(_) => NEUTRAL_WEATHER_SCORE,
    };

    score.clamp(0.0, 100.0)
}

/// Semantic normalization: scale the [0, 1] confidence to [0, 100].
pub fn normalize_semantic(signal: &SemanticSignal) -> f64 {
    (signal.confidence.clamp(0.0, 1.0) * 100.0).clamp(0.0, 100.0)
}
