//! Weighted fusion of the three normalized signal scores.

use serde::{Deserialize, Serialize};

/// Fusion weights for the three normalized contributions.
///
/// The default split encodes signal trustworthiness: observed/reported
/// events 50%, locally measured weather 30%, NLP-derived semantics 20%.
/// Weights are policy, not constants: deployments may override and call
/// [`FusionWeights::normalize`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FusionWeights {
    pub event: f64,
    pub weather: f64,
    pub semantic: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            event: 0.5,
            weather: 0.3,
            semantic: 0.2,
        }
    }
}

impl FusionWeights {
    /// Normalize weights to sum to 1.0.
    pub fn normalize(&mut self) {
        let sum = self.event + self.weather + self.semantic;
        if sum > 0.0 {
            self.event /= sum;
            self.weather /= sum;
            self.semantic /= sum;
        }
    }
}

/// Fused risk with its derived confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FusedRisk {
    /// Final risk percentage, one decimal, in [0, 100].
    pub risk_percentage: f64,
    /// Confidence in [0.6, 1.0], two decimals.
    ///
    /// Confidence rises with risk because high-risk assessments are
    /// typically corroborated by more and stronger contributing events.
    /// This is a deliberate heuristic, not a statistical guarantee.
    pub confidence: f64,
}

/// Combine the normalized scores into a final risk and confidence.
/// Each input is clamped to [0, 100] before weighting.
pub fn fuse(event_score: f64, weather_score: f64, semantic_score: f64, weights: &FusionWeights) -> FusedRisk {
    let event = event_score.clamp(0.0, 100.0);
    let weather = weather_score.clamp(0.0, 100.0);
    let semantic = semantic_score.clamp(0.0, 100.0);

    let raw = event * weights.event + weather * weights.weather + semantic * weights.semantic;
    let risk_percentage = round_to(raw.clamp(0.0, 100.0), 1);

    let confidence = round_to((0.6 + risk_percentage / 200.0).clamp(0.6, 1.0), 2);

    FusedRisk {
        risk_percentage,
        confidence,
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
