//! Risk tiering and recommended actions.
//!
//! Four ordered bands over the fused risk score, each with an increasingly
//! urgent recommendation set. Tier assignment never varies by hazard;
//! phrasing does.

use serde::Serialize;

use crate::hazard::HazardType;

/// Appended whenever the event feed reported an active alert, regardless of
/// tier.
pub const ACTIVE_EVENTS_NOTE: &str = "Active disaster events detected in the area";

/// Ordinal risk classification.
///
/// Bands are inclusive at the lower bound, exclusive at the upper bound,
/// except CRITICAL which includes 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    /// Band lookup: [0,40) LOW, [40,60) MODERATE, [60,80) HIGH,
    /// [80,100] CRITICAL.
    pub fn from_score(risk: f64) -> Self {
        if risk < 40.0 {
            Self::Low
        } else if risk < 60.0 {
            Self::Moderate
        } else if risk < 80.0 {
            Self::High
        } else {
            Self::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Fixed recommendation for a hazard ruled out by the geographic filter.
pub fn not_applicable(hazard: &HazardType) -> String {
    format!("{} risk not applicable for this region", hazard.label())
}

/// Deterministic recommendation list for (tier, hazard), with the active
/// events note appended when the feed reported an alert.
pub fn recommendations(tier: RiskTier, hazard: &HazardType, alert: bool) -> Vec<String> {
    let mut actions = match tier {
        RiskTier::Low => vec![
            "Situation normal".to_string(),
            "Continue routine monitoring".to_string(),
        ],
        RiskTier::Moderate => vec![
            format!("Issue advisory for {}", hazard.label()),
            "Activate district monitoring committees".to_string(),
        ],
        RiskTier::High => vec![
            format!("Issue public alert for {}", hazard.label()),
            "Mobilize response resources".to_string(),
        ],
        RiskTier::Critical => vec![
            critical_action(hazard),
            "Place emergency services on standby".to_string(),
        ],
    };

    if alert {
        actions.push(ACTIVE_EVENTS_NOTE.to_string());
    }

    actions
}

/// Hazard-specific evacuation guidance at CRITICAL.
fn critical_action(hazard: &HazardType) -> String {
    match hazard {
        HazardType::Flood => "Evacuate low-lying areas immediately".to_string(),
        HazardType::Cyclone => "Evacuate coastal areas and open storm shelters".to_string(),
        HazardType::Heatwave => "Issue stay-indoors guidance and open cooling centres".to_string(),
        HazardType::Earthquake => "Evacuate unsafe structures and stage search-and-rescue".to_string(),
        HazardType::Landslide => "Evacuate slopes and landslide-prone settlements".to_string(),
        HazardType::Other(label) => format!("Issue immediate evacuation guidance for {label}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(RiskTier::from_score(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(39.9), RiskTier::Low);
        assert_eq!(RiskTier::from_score(40.0), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(59.9), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(60.0), RiskTier::High);
        assert_eq!(RiskTier::from_score(79.9), RiskTier::High);
        assert_eq!(RiskTier::from_score(80.0), RiskTier::Critical);
        assert_eq!(RiskTier::from_score(100.0), RiskTier::Critical);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(RiskTier::Low < RiskTier::Moderate);
        assert!(RiskTier::Moderate < RiskTier::High);
        assert!(RiskTier::High < RiskTier::Critical);
    }

    #[test]
    fn tier_assignment_does_not_vary_by_hazard() {
        for score in [10.0, 45.0, 65.0, 90.0] {
            let tier = RiskTier::from_score(score);
            // Phrasing differs per hazard, tier never does; from_score takes
            // no hazard at all, so assert the phrasing stays tier-consistent.
            let flood = recommendations(tier, &HazardType::Flood, false);
            let quake = recommendations(tier, &HazardType::Earthquake, false);
            assert_eq!(flood.len(), quake.len());
        }
    }

    #[test]
    fn critical_flood_uses_hazard_specific_phrasing() {
        let actions = recommendations(RiskTier::Critical, &HazardType::Flood, false);
        assert_eq!(actions[0], "Evacuate low-lying areas immediately");
    }

    #[test]
    fn alert_appends_active_events_note_at_every_tier() {
        for tier in [
            RiskTier::Low,
            RiskTier::Moderate,
            RiskTier::High,
            RiskTier::Critical,
        ] {
            let actions = recommendations(tier, &HazardType::Flood, true);
            assert_eq!(actions.last().map(String::as_str), Some(ACTIVE_EVENTS_NOTE));
        }
    }

    #[test]
    fn recommendations_are_deterministic() {
        let a = recommendations(RiskTier::High, &HazardType::Landslide, true);
        let b = recommendations(RiskTier::High, &HazardType::Landslide, true);
        assert_eq!(a, b);
    }
}
