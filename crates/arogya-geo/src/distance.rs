//! Great-circle distance and travel-time estimation.

use arogya_core::types::Coordinate;

/// Mean Earth radius in kilometers, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Minutes of travel per kilometer in the ETA heuristic (~12 km/h effective).
const ETA_MINUTES_PER_KM: f64 = 5.0;

/// Constant overhead added to every ETA, in minutes.
const ETA_OVERHEAD_MINUTES: u32 = 2;

/// A straight-line travel estimate between two coordinates.
///
/// The ETA is a fixed linear heuristic, not a routing-engine figure: it
/// assumes a constant effective speed plus a flat overhead and should be
/// presented as approximate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelEstimate {
    /// Great-circle distance, rounded to one decimal place.
    pub distance_km: f64,
    /// `round(distance_km * 5) + 2` minutes.
    pub eta_minutes: u32,
}

/// Unrounded great-circle distance between two coordinates, in kilometers.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Distance (one decimal place) and heuristic ETA between two coordinates.
pub fn estimate(from: Coordinate, to: Coordinate) -> TravelEstimate {
    let distance_km = (haversine_km(from, to) * 10.0).round() / 10.0;
    let eta_minutes = (distance_km * ETA_MINUTES_PER_KM).round() as u32 + ETA_OVERHEAD_MINUTES;
    TravelEstimate {
        distance_km,
        eta_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AHMEDABAD: Coordinate = Coordinate {
        lat: 23.0225,
        lon: 72.5714,
    };
    const ANAND: Coordinate = Coordinate {
        lat: 22.55,
        lon: 72.95,
    };

    #[test]
    fn test_distance_zero_at_same_point() {
        let e = estimate(AHMEDABAD, AHMEDABAD);
        assert_eq!(e.distance_km, 0.0);
        assert_eq!(e.eta_minutes, ETA_OVERHEAD_MINUTES);
    }

    #[test]
    fn test_distance_symmetry() {
        let ab = estimate(AHMEDABAD, ANAND);
        let ba = estimate(ANAND, AHMEDABAD);
        assert_eq!(ab.distance_km, ba.distance_km);
        assert_eq!(ab.eta_minutes, ba.eta_minutes);
    }

    #[test]
    fn test_known_distance_ahmedabad_anand() {
        // ~65 km apart by great circle.
        let d = haversine_km(AHMEDABAD, ANAND);
        assert!(d > 60.0 && d < 70.0, "unexpected distance: {}", d);
    }

    #[test]
    fn test_distance_rounded_to_one_decimal() {
        let e = estimate(AHMEDABAD, ANAND);
        let scaled = e.distance_km * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn test_eta_formula() {
        // 2.0 km -> round(10) + 2 = 12 minutes.
        let from = Coordinate::new(0.0, 0.0);
        // ~0.018 degrees of latitude per 2 km.
        let to = Coordinate::new(2.0 / 111.195, 0.0);
        let e = estimate(from, to);
        assert_eq!(e.distance_km, 2.0);
        assert_eq!(e.eta_minutes, 12);
    }

    #[test]
    fn test_eta_monotone_in_distance() {
        let from = Coordinate::new(0.0, 0.0);
        let mut last_eta = 0;
        for i in 1..=50 {
            let to = Coordinate::new(0.01 * i as f64, 0.0);
            let e = estimate(from, to);
            assert!(
                e.eta_minutes >= last_eta,
                "ETA decreased at step {}: {} < {}",
                i,
                e.eta_minutes,
                last_eta
            );
            last_eta = e.eta_minutes;
        }
    }

    #[test]
    fn test_antipodal_distance_near_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = haversine_km(a, b);
        // Half of 2 * pi * 6371.
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1.0);
    }

    #[test]
    fn test_small_offsets_do_not_go_negative() {
        let a = Coordinate::new(23.0, 72.0);
        let b = Coordinate::new(23.0000001, 72.0000001);
        let e = estimate(a, b);
        assert!(e.distance_km >= 0.0);
        assert_eq!(e.eta_minutes, ETA_OVERHEAD_MINUTES);
    }
}
