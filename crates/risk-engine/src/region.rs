//! Region reference data.
//!
//! Regions are immutable reference records loaded once at process start and
//! shared read-only between requests. Each carries a representative
//! coordinate plus static risk-modifier attributes consumed by the
//! normalizer (coastal flag, seismic zone rank, prone-ness multipliers).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionError {
    #[error("Region not found: {0}")]
    NotFound(String),
}

/// A named geographic area with static risk-modifier attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Cyclone eligibility: only coastal regions can carry cyclone risk.
    pub coastal: bool,
    /// Seismic zone rank (0..=100) from the national zoning table.
    /// `None` means no table entry; the normalizer falls back to a flat 40.
    pub seismic_zone_rank: Option<u8>,
    /// Flood prone-ness multiplier (>= 1.0).
    pub flood_prone_multiplier: f64,
    /// Heatwave prone-ness multiplier (>= 1.0).
    pub heat_prone_multiplier: f64,
    /// Landslide prone-ness multiplier (>= 1.0).
    pub landslide_prone_multiplier: f64,
    /// Floor for the cyclone weather score (0..=100); meaningful only for
    /// coastal regions.
    pub cyclone_base_risk: f64,
}

impl Region {
    /// Inland region: cyclone-ineligible, no cyclone base risk.
    #[allow(clippy::too_many_arguments)]
    pub fn inland(
        name: &str,
        latitude: f64,
        longitude: f64,
        seismic_zone_rank: u8,
        flood: f64,
        heat: f64,
        landslide: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            coastal: false,
            seismic_zone_rank: Some(seismic_zone_rank),
            flood_prone_multiplier: flood,
            heat_prone_multiplier: heat,
            landslide_prone_multiplier: landslide,
            cyclone_base_risk: 0.0,
        }
    }

    /// Coastal region: cyclone-eligible with a base cyclone risk floor.
    #[allow(clippy::too_many_arguments)]
    pub fn coastal(
        name: &str,
        latitude: f64,
        longitude: f64,
        seismic_zone_rank: u8,
        flood: f64,
        heat: f64,
        landslide: f64,
        cyclone_base_risk: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            coastal: true,
            seismic_zone_rank: Some(seismic_zone_rank),
            flood_prone_multiplier: flood,
            heat_prone_multiplier: heat,
            landslide_prone_multiplier: landslide,
            cyclone_base_risk,
        }
    }
}

/// Name-keyed registry of regions, read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct RegionRegistry {
    regions: HashMap<String, Region>,
}

impl RegionRegistry {
    pub fn new(regions: Vec<Region>) -> Self {
        let regions = regions
            .into_iter()
            .map(|r| (r.name.to_lowercase(), r))
            .collect();
        Self { regions }
    }

    /// Case-insensitive lookup by region name.
    pub fn get(&self, name: &str) -> Result<&Region, RegionError> {
        self.regions
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| RegionError::NotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }
}

/// Built-in Indian state table.
///
/// Centroids follow the upstream coordinate table; seismic zone ranks map
/// the national zoning (zone II=25, III=45, IV=70, V=90). Multipliers encode
/// historical prone-ness and stay at 1.0 where a state has no elevated
/// exposure.
pub fn load_default_regions() -> RegionRegistry {
    RegionRegistry::new(vec![
        Region::inland("Assam", 26.2006, 92.9376, 90, 1.5, 1.0, 1.3),
        Region::inland("Delhi", 28.6139, 77.2090, 70, 1.1, 1.4, 1.0),
        Region::coastal("Maharashtra", 19.7515, 75.7139, 45, 1.2, 1.2, 1.1, 25.0),
        Region::coastal("Kerala", 10.8505, 76.2711, 45, 1.4, 1.0, 1.4, 30.0),
        Region::coastal("Tamil Nadu", 11.1271, 78.6569, 45, 1.2, 1.2, 1.0, 40.0),
        Region::coastal("Odisha", 20.9517, 85.0985, 45, 1.3, 1.3, 1.0, 55.0),
        Region::coastal("West Bengal", 22.9868, 87.8550, 70, 1.4, 1.1, 1.1, 50.0),
        Region::coastal("Gujarat", 22.2587, 71.1924, 70, 1.1, 1.3, 1.0, 35.0),
        Region::inland("Rajasthan", 27.0238, 74.2179, 25, 1.0, 1.5, 1.0),
        Region::inland("Manipur", 24.6633, 93.9063, 90, 1.2, 1.0, 1.4),
        Region::coastal("Goa", 15.2993, 74.1240, 45, 1.1, 1.0, 1.1, 25.0),
        Region::inland("Chhattisgarh", 21.2787, 81.8661, 25, 1.1, 1.3, 1.0),
        Region::inland("Arunachal Pradesh", 28.2180, 94.7278, 90, 1.3, 1.0, 1.5),
        Region::coastal("Karnataka", 15.3173, 75.7139, 45, 1.1, 1.1, 1.2, 20.0),
        Region::coastal("Andhra Pradesh", 15.9129, 79.7400, 45, 1.2, 1.3, 1.0, 45.0),
    ])
}
