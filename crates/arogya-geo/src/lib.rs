//! Geolocation and distance estimation for the Arogya client.
//!
//! [`distance`] holds the pure great-circle/travel-time math; [`locate`]
//! wraps a best-effort position source behind a timeout with a silent
//! fallback coordinate.

pub mod distance;
pub mod locate;

pub use distance::{estimate, haversine_km, TravelEstimate};
pub use locate::{
    FixedPosition, Locator, NoPosition, PositionError, PositionSource, DEFAULT_POSITION,
    MAP_FALLBACK_POSITION,
};
