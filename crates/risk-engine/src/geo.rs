//! Geographic primitives: great-circle distance and hazard eligibility.

use crate::hazard::HazardType;
use crate::region::Region;

/// Mean Earth radius, km.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two coordinates, km.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Geo eligibility filter.
///
/// Cyclone risk is physically meaningful only for coastal regions; every
/// other hazard (including unrecognized ones) is always applicable. Callers
/// must short-circuit on `false` before fetching any external signal.
pub fn is_applicable(region: &Region, hazard: &HazardType) -> bool {
    match hazard {
        HazardType::Cyclone => region.coastal,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::load_default_regions;

    #[test]
    fn haversine_known_distance() {
        // Delhi to Mumbai, roughly 1150 km.
        let d = haversine_km(28.6139, 77.2090, 19.0760, 72.8777);
        assert!((1100.0..1200.0).contains(&d), "got {d}");
    }

    #[test]
    fn haversine_zero_for_identical_points() {
        let d = haversine_km(10.8505, 76.2711, 10.8505, 76.2711);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn non_cyclone_hazards_always_applicable() {
        let registry = load_default_regions();
        let hazards = [
            HazardType::Flood,
            HazardType::Heatwave,
            HazardType::Earthquake,
            HazardType::Landslide,
            HazardType::Other("tsunami".to_string()),
        ];
        for region in registry.iter() {
            for hazard in &hazards {
                assert!(is_applicable(region, hazard), "{} {}", region.name, hazard);
            }
        }
    }

    #[test]
    fn cyclone_applicable_iff_coastal() {
        let registry = load_default_regions();
        for region in registry.iter() {
            assert_eq!(
                is_applicable(region, &HazardType::Cyclone),
                region.coastal,
                "{}",
                region.name
            );
        }
    }
}
