//! Hazard classification.

use std::fmt;

/// Disaster category under assessment.
///
/// Open to extension: labels the engine does not recognize parse to
/// [`HazardType::Other`] and receive the neutral weather score rather than
/// an error, so a new hazard type degrades gracefully end to end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HazardType {
    Flood,
    Heatwave,
    Earthquake,
    Cyclone,
    Landslide,
    /// Unrecognized hazard label (kept lowercased for display).
    Other(String),
}

impl HazardType {
    /// Parse a request-supplied hazard label, case-insensitively.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "flood" => Self::Flood,
            "heatwave" => Self::Heatwave,
            "earthquake" => Self::Earthquake,
            "cyclone" => Self::Cyclone,
            "landslide" => Self::Landslide,
            other => Self::Other(other.to_string()),
        }
    }

    /// Canonical lowercase label, used in recommendations and responses.
    pub fn label(&self) -> &str {
        match self {
            Self::Flood => "flood",
            Self::Heatwave => "heatwave",
            Self::Earthquake => "earthquake",
            Self::Cyclone => "cyclone",
            Self::Landslide => "landslide",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
