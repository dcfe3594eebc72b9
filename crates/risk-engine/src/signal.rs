//! Signal data model shared between the engine and its collaborators.
//!
//! Raw signal values arrive wrapped in [`Sourced`] so the engine can report
//! provenance (live value vs documented fallback) without re-deriving how a
//! value was obtained.

use serde::{Deserialize, Serialize};

/// Documented weather fallbacks, applied field-by-field at normalization
/// time and wholesale when the weather source fails.
pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;
pub const DEFAULT_HUMIDITY_PCT: f64 = 60.0;
pub const DEFAULT_PRECIPITATION_MM: f64 = 0.0;
pub const DEFAULT_WIND_SPEED_KMH: f64 = 5.0;

/// Latest-interval weather observation. Every field is optional: a live
/// payload may lack any of them, and absence is resolved against the
/// documented defaults, never silently treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub precipitation_mm: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
}

impl WeatherSnapshot {
    /// The documented fallback snapshot substituted when the weather source
    /// is unavailable: 25 °C, 60 % humidity, 0 mm precipitation, 5 km/h wind.
    pub fn fallback() -> Self {
        Self {
            temperature_c: Some(DEFAULT_TEMPERATURE_C),
            humidity_pct: Some(DEFAULT_HUMIDITY_PCT),
            precipitation_mm: Some(DEFAULT_PRECIPITATION_MM),
            wind_speed_kmh: Some(DEFAULT_WIND_SPEED_KMH),
        }
    }

    pub fn temperature_or_default(&self) -> f64 {
        self.temperature_c.unwrap_or(DEFAULT_TEMPERATURE_C)
    }

    pub fn humidity_or_default(&self) -> f64 {
        self.humidity_pct.unwrap_or(DEFAULT_HUMIDITY_PCT)
    }

    pub fn precipitation_or_default(&self) -> f64 {
        self.precipitation_mm.unwrap_or(DEFAULT_PRECIPITATION_MM)
    }

    pub fn wind_speed_or_default(&self) -> f64 {
        self.wind_speed_kmh.unwrap_or(DEFAULT_WIND_SPEED_KMH)
    }
}

/// One nearby disaster event from the event feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReport {
    /// Feed-reported severity (dimensionless, typically 1..=5).
    pub severity: f64,
    /// Great-circle distance from the region center, km.
    pub distance_km: f64,
    /// Feed event classification, when present.
    pub event_type: Option<String>,
}

/// Count-weighted severity accumulator from the event feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventSignal {
    pub events: Vec<EventReport>,
    /// At least one qualifying event within the proximity radius.
    pub alert: bool,
}

impl EventSignal {
    /// Fallback when the event feed is unavailable: no reports, no alert.
    /// The normalizer still yields the baseline score, never zero, since
    /// under-reporting must not be confused with confirmed safety.
    pub fn quiet() -> Self {
        Self::default()
    }
}

/// Model-estimated emergency likelihood from the semantic source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemanticSignal {
    /// Confidence in [0, 1].
    pub confidence: f64,
}

impl SemanticSignal {
    pub fn new(confidence: f64) -> Self {
        Self {
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Fallback when the semantic source is unavailable: 0.5, i.e. maximal
    /// uncertainty, neither safety nor confirmed risk.
    pub fn neutral() -> Self {
        Self { confidence: 0.5 }
    }
}

/// A signal value together with how it was obtained.
#[derive(Debug, Clone)]
pub enum Sourced<T> {
    /// Fetched live from the source.
    Live(T),
    /// Documented fallback substituted after a source failure.
    Fallback { value: T, reason: String },
}

impl<T> Sourced<T> {
    pub fn value(&self) -> &T {
        match self {
            Self::Live(v) => v,
            Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            Self::Live(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn status(&self) -> SourceStatus {
        match self {
            Self::Live(_) => SourceStatus::Live,
            Self::Fallback { reason, .. } => SourceStatus::Fallback {
                reason: reason.clone(),
            },
        }
    }
}

/// The complete set of raw signals handed to the fusion pipeline. Built by
/// the collaborator layer; always complete, never partial.
#[derive(Debug, Clone)]
pub struct SignalBundle {
    pub event: Sourced<EventSignal>,
    pub weather: Sourced<WeatherSnapshot>,
    pub semantic: Sourced<SemanticSignal>,
}

impl SignalBundle {
    /// Bundle in which every source fell back, used when nothing was fetched.
    pub fn all_fallback(reason: &str) -> Self {
        Self {
            event: Sourced::Fallback {
                value: EventSignal::quiet(),
                reason: reason.to_string(),
            },
            weather: Sourced::Fallback {
                value: WeatherSnapshot::fallback(),
                reason: reason.to_string(),
            },
            semantic: Sourced::Fallback {
                value: SemanticSignal::neutral(),
                reason: reason.to_string(),
            },
        }
    }
}

/// Per-source outcome recorded in the assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceStatus {
    Live,
    Fallback { reason: String },
}

impl SourceStatus {
    fn describe(&self, name: &str) -> String {
        match self {
            Self::Live => name.to_string(),
            Self::Fallback { reason } => format!("{name} (fallback: {reason})"),
        }
    }
}

/// Which sources contributed to an assessment vs fell back.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// The geographic filter short-circuited the request; no source invoked.
    GeographicFilter,
    /// Full fusion over the three sources.
    Fused {
        event_feed: SourceStatus,
        weather_feed: SourceStatus,
        semantic_model: SourceStatus,
    },
}

impl Provenance {
    pub fn from_bundle(bundle: &SignalBundle) -> Self {
        Self::Fused {
            event_feed: bundle.event.status(),
            weather_feed: bundle.weather.status(),
            semantic_model: bundle.semantic.status(),
        }
    }

    /// Human-readable source summary for the response `details.sources`.
    pub fn summary(&self) -> String {
        match self {
            Self::GeographicFilter => "geographic filter".to_string(),
            Self::Fused {
                event_feed,
                weather_feed,
                semantic_model,
            } => format!(
                "{} + {} + {}",
                event_feed.describe("event feed"),
                weather_feed.describe("weather feed"),
                semantic_model.describe("semantic model"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_snapshot_carries_documented_defaults() {
        let wx = WeatherSnapshot::fallback();
        assert_eq!(wx.temperature_c, Some(25.0));
        assert_eq!(wx.humidity_pct, Some(60.0));
        assert_eq!(wx.precipitation_mm, Some(0.0));
        assert_eq!(wx.wind_speed_kmh, Some(5.0));
    }

    #[test]
    fn empty_snapshot_resolves_to_defaults() {
        let wx = WeatherSnapshot::default();
        assert_eq!(wx.temperature_or_default(), 25.0);
        assert_eq!(wx.humidity_or_default(), 60.0);
        assert_eq!(wx.precipitation_or_default(), 0.0);
        assert_eq!(wx.wind_speed_or_default(), 5.0);
    }

    #[test]
    fn provenance_summary_marks_fallbacks() {
        let bundle = SignalBundle {
            event: Sourced::Live(EventSignal::quiet()),
            weather: Sourced::Fallback {
                value: WeatherSnapshot::fallback(),
                reason: "timeout".to_string(),
            },
            semantic: Sourced::Live(SemanticSignal::neutral()),
        };
        let summary = Provenance::from_bundle(&bundle).summary();
        assert_eq!(
            summary,
            "event feed + weather feed (fallback: timeout) + semantic model"
        );
    }

    #[test]
    fn semantic_signal_clamps_to_unit_interval() {
        assert_eq!(SemanticSignal::new(1.7).confidence, 1.0);
        assert_eq!(SemanticSignal::new(-0.2).confidence, 0.0);
    }
}
