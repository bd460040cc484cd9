//! Amenity query against an Overpass-style interpreter.
//!
//! One bounded query fetches hospitals and pharmacies around a center,
//! accepting both point nodes (`lat`/`lon`) and ways with a computed
//! centroid (`center: {lat, lon}`). Normalization enforces the directory
//! invariant: no name tag or no resolvable, in-range coordinate means the
//! record is dropped.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use arogya_core::types::{Coordinate, Facility, FacilityKind, GovernmentCards};

use crate::error::DirectoryError;

/// Raw Overpass response envelope.
#[derive(Debug, Deserialize)]
pub struct AmenityResponse {
    #[serde(default)]
    pub elements: Vec<AmenityElement>,
}

/// One returned element: a node or a way with centroid.
#[derive(Debug, Deserialize)]
pub struct AmenityElement {
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<AmenityCenter>,
    #[serde(default)]
    pub tags: Option<AmenityTags>,
}

#[derive(Debug, Deserialize)]
pub struct AmenityCenter {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize, Default)]
pub struct AmenityTags {
    #[serde(default)]
    pub amenity: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Build the interpreter query for hospitals and pharmacies around `center`.
pub fn build_query(center: Coordinate, radius_m: u32) -> String {
    format!(
        "[out:json];(\
         node[\"amenity\"=\"hospital\"](around:{radius},{lat},{lon});\
         node[\"amenity\"=\"pharmacy\"](around:{radius},{lat},{lon});\
         way[\"amenity\"=\"hospital\"](around:{radius},{lat},{lon});\
         way[\"amenity\"=\"pharmacy\"](around:{radius},{lat},{lon});\
         );out center;",
        radius = radius_m,
        lat = center.lat,
        lon = center.lon,
    )
}

/// Normalize one raw element into a [`Facility`], or drop it.
pub fn normalize(element: AmenityElement) -> Option<Facility> {
    let tags = element.tags?;
    let name = tags.name.filter(|n| !n.trim().is_empty())?;
    let kind = match tags.amenity.as_deref() {
        Some("hospital") => FacilityKind::Hospital,
        Some("pharmacy") => FacilityKind::Pharmacy,
        _ => return None,
    };
    let coordinate = match (element.lat, element.lon, element.center) {
        (Some(lat), Some(lon), _) => Coordinate::new(lat, lon),
        (_, _, Some(center)) => Coordinate::new(center.lat, center.lon),
        _ => return None,
    };
    if !coordinate.is_valid() {
        return None;
    }
    let benefit = match kind {
        FacilityKind::Hospital => "Medical Services",
        FacilityKind::Pharmacy => "Medicines available",
    };
    Some(Facility {
        id: element.id.to_string(),
        name,
        coordinate,
        kind,
        specialty: None,
        certifications: None,
        contact: None,
        cashless_policy: None,
        benefit_description: Some(benefit.to_string()),
        government_card_flags: GovernmentCards::default(),
        source_city: None,
    })
}

/// Fetch and normalize nearby facilities.
pub async fn fetch_nearby(
    http: &Client,
    interpreter_url: &str,
    center: Coordinate,
    radius_m: u32,
) -> Result<Vec<Facility>, DirectoryError> {
    let query = build_query(center, radius_m);
    debug!(url = %interpreter_url, radius_m, "Amenity query");
    let response = http
        .get(interpreter_url)
        .query(&[("data", query.as_str())])
        .send()
        .await?;
    let body: AmenityResponse = response
        .json()
        .await
        .map_err(|e| DirectoryError::Decode(e.to_string()))?;
    let total = body.elements.len();
    let facilities: Vec<Facility> = body.elements.into_iter().filter_map(normalize).collect();
    debug!(total, kept = facilities.len(), "Amenity elements normalized");
    Ok(facilities)
}
