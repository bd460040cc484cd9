//! Facility directory for the Arogya map view.
//!
//! Merges the fixed curated facility list with live results from a
//! third-party amenity query, and exposes specialty filtering. Query
//! failures silently degrade to the curated list alone.

pub mod curated;
pub mod directory;
pub mod error;
pub mod overpass;

pub use curated::curated_facilities;
pub use directory::{matches_filter, FacilityDirectory};
pub use error::DirectoryError;
