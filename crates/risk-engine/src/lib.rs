//! Risk Fusion Engine
//!
//! Fuses three independent, unreliable external signals into a single
//! disaster risk percentage for a (region, hazard) pair:
//! - a recent-event/severity feed
//! - a live weather feed
//! - a semantic/NLP confidence score
//!
//! The engine is pure and synchronous: it consumes already-fetched signal
//! values, never performs I/O, and never reads process environment. Fetching,
//! timeouts, and fallback substitution belong to the collaborator layer
//! (see the `hazard-signals` crate).
//!
//! # Pipeline
//!
//! ```text
//! (region, hazard)
//!     -> geo eligibility filter      [ineligible: fixed zero-risk result]
//!     -> per-source normalization    [each clamped to 0..=100]
//!     -> weighted fusion             [default 0.5 event / 0.3 weather / 0.2 semantic]
//!     -> tier + recommendations
//! ```

pub mod assessment;
pub mod fusion;
pub mod geo;
pub mod hazard;
pub mod normalize;
pub mod recommend;
pub mod region;
pub mod signal;

pub use assessment::{assess, assess_ineligible, RiskAssessment, INELIGIBLE_CONFIDENCE};
pub use fusion::{fuse, FusedRisk, FusionWeights};
pub use geo::{haversine_km, is_applicable};
pub use hazard::HazardType;
pub use recommend::RiskTier;
pub use region::{load_default_regions, Region, RegionError, RegionRegistry};
pub use signal::{
    EventReport, EventSignal, Provenance, SemanticSignal, SignalBundle, SourceStatus, Sourced,
    WeatherSnapshot,
};

/// Engine policy knobs, constructed explicitly at startup and passed in.
///
/// Weights are a configurable policy rather than a hardcoded constant; the
/// 50/30/20 default reflects signal trustworthiness (observed events >
/// measured weather > NLP-derived semantics).
#[derive(Debug, Clone)]
pub struct RiskConfig {
    /// Fusion weights for the three normalized signal scores.
    pub weights: FusionWeights,
    /// Great-circle radius within which an event qualifies as "nearby".
    pub event_radius_km: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            weights: FusionWeights::default(),
            event_radius_km: normalize::EVENT_RADIUS_KM,
        }
    }
}
