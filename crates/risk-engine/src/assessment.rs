//! The assessment pipeline: normalize, fuse, tier, recommend.

use serde::Serialize;

use crate::fusion::fuse;
use crate::geo::is_applicable;
use crate::hazard::HazardType;
use crate::normalize::{normalize_event, normalize_semantic, normalize_weather};
use crate::recommend::{self, RiskTier};
use crate::region::Region;
use crate::signal::{Provenance, SignalBundle};
use crate::RiskConfig;

/// Fixed confidence for a geographically ineligible pairing. Eligibility is
/// certain, not probabilistic.
pub const INELIGIBLE_CONFIDENCE: f64 = 0.95;

/// Complete risk assessment for a (region, hazard) pair.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub region: String,
    pub hazard: String,
    /// Final risk percentage in [0, 100], one decimal.
    pub risk_percentage: f64,
    pub risk_level: RiskTier,
    /// Confidence in [0, 1].
    pub confidence: f64,
    /// Semantic model confidence echoed on the [0, 1] scale.
    pub semantic_score: f64,
    /// Ordered, tier-appropriate actions.
    pub recommendations: Vec<String>,
    /// Which sources contributed vs fell back.
    pub provenance: Provenance,
}

/// Fixed zero-risk assessment for a hazard the geographic filter ruled out.
/// Callers must invoke this *instead of* fetching any external signal.
pub fn assess_ineligible(region: &Region, hazard: &HazardType) -> RiskAssessment {
    RiskAssessment {
        region: region.name.clone(),
        hazard: hazard.label().to_string(),
        risk_percentage: 0.0,
        risk_level: RiskTier::Low,
        confidence: INELIGIBLE_CONFIDENCE,
        semantic_score: 0.0,
        recommendations: vec![recommend::not_applicable(hazard)],
        provenance: Provenance::GeographicFilter,
    }
}

/// Run the full fusion pipeline over an already-fetched signal bundle.
///
/// Pure and deterministic: identical bundles yield identical assessments.
/// Guards the eligibility rule even if the caller forgot to short-circuit.
pub fn assess(
    region: &Region,
    hazard: &HazardType,
    bundle: &SignalBundle,
    config: &RiskConfig,
) -> RiskAssessment {
    if !is_applicable(region, hazard) {
        return assess_ineligible(region, hazard);
    }

    let event_score = normalize_event(bundle.event.value(), config.event_radius_km);
    let weather_score = normalize_weather(bundle.weather.value(), hazard, region);
    let semantic_score = normalize_semantic(bundle.semantic.value());

    let fused = fuse(event_score, weather_score, semantic_score, &config.weights);
    let tier = RiskTier::from_score(fused.risk_percentage);
    let alert = bundle.event.value().alert;

    RiskAssessment {
        region: region.name.clone(),
        hazard: hazard.label().to_string(),
        risk_percentage: fused.risk_percentage,
        risk_level: tier,
        confidence: fused.confidence,
        // Back to the [0, 1] scale, two decimals.
        semantic_score: semantic_score.round() / 100.0,
        recommendations: recommend::recommendations(tier, hazard, alert),
        provenance: Provenance::from_bundle(bundle),
    }
}
