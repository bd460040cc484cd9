//! The facility directory: curated entries plus live amenity results.

use reqwest::Client;
use tracing::{debug, warn};

use arogya_core::types::{Coordinate, Facility, Specialty};

use crate::curated::curated_facilities;
use crate::error::DirectoryError;
use crate::overpass;

/// Holds the current facility result set.
///
/// `refresh` swaps the whole set atomically: callers never observe a partial
/// merge. A failed query leaves the curated list as the result set and does
/// not raise.
pub struct FacilityDirectory {
    http: Client,
    interpreter_url: String,
    radius_m: u32,
    facilities: Vec<Facility>,
}

impl FacilityDirectory {
    /// A directory seeded with the curated list.
    pub fn new(interpreter_url: impl Into<String>, radius_m: u32) -> Result<Self, DirectoryError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            interpreter_url: interpreter_url.into(),
            radius_m,
            facilities: curated_facilities(),
        })
    }

    /// Re-query the amenity source around `center` and replace the result
    /// set with curated ∪ fetched. On failure, falls back to the curated
    /// list alone; the caller sees no error either way.
    pub async fn refresh(&mut self, center: Coordinate) {
        match overpass::fetch_nearby(&self.http, &self.interpreter_url, center, self.radius_m).await
        {
            Ok(fetched) => {
                debug!(fetched = fetched.len(), "Directory refreshed");
                let mut next = curated_facilities();
                next.extend(fetched);
                self.facilities = next;
            }
            Err(e) => {
                warn!(error = %e, "Amenity query failed; keeping curated list only");
                self.facilities = curated_facilities();
            }
        }
    }

    /// The current result set, curated entries first.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Facilities matching the given specialty tag.
    pub fn filter(&self, tag: Specialty) -> Vec<Facility> {
        self.facilities
            .iter()
            .filter(|f| matches_filter(f, tag))
            .cloned()
            .collect()
    }
}

/// Whether a facility's specialty text matches the tag.
///
/// `All` matches everything. A specific tag matches when the specialty text
/// contains the tag itself, or one of its documented shorthand expansions.
/// Facilities with no specialty text never match a specific tag.
pub fn matches_filter(facility: &Facility, tag: Specialty) -> bool {
    if tag == Specialty::All {
        return true;
    }
    let specialty = match facility.specialty.as_deref() {
        Some(s) => s.to_lowercase(),
        None => return false,
    };
    if specialty.contains(tag.as_str()) {
        return true;
    }
    match tag {
        Specialty::Orthopaedic => specialty.contains("orthop"),
        Specialty::Gynaecology => specialty.contains("gynae") || specialty.contains("women"),
        Specialty::Medicine => specialty.contains("medicine"),
        Specialty::Skin => specialty.contains("skin") || specialty.contains("derma"),
        Specialty::Multispeciality | Specialty::All => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arogya_core::types::{FacilityKind, GovernmentCards};

    fn facility_with_specialty(specialty: Option<&str>) -> Facility {
        Facility {
            id: "t1".to_string(),
            name: "Test".to_string(),
            coordinate: Coordinate::new(23.0, 72.5),
            kind: FacilityKind::Hospital,
            specialty: specialty.map(str::to_string),
            certifications: None,
            contact: None,
            cashless_policy: None,
            benefit_description: None,
            government_card_flags: GovernmentCards::default(),
            source_city: None,
        }
    }

    fn directory() -> FacilityDirectory {
        FacilityDirectory::new("http://127.0.0.1:9", 5000).unwrap()
    }

    // ---- matches_filter ----

    #[test]
    fn test_all_matches_everything() {
        assert!(matches_filter(&facility_with_specialty(None), Specialty::All));
        assert!(matches_filter(
            &facility_with_specialty(Some("anything")),
            Specialty::All
        ));
    }

    #[test]
    fn test_no_specialty_never_matches_specific_tag() {
        let f = facility_with_specialty(None);
        assert!(!matches_filter(&f, Specialty::Orthopaedic));
        assert!(!matches_filter(&f, Specialty::Skin));
    }

    #[test]
    fn test_direct_substring_match() {
        let f = facility_with_specialty(Some("Multispeciality"));
        assert!(matches_filter(&f, Specialty::Multispeciality));
    }

    #[test]
    fn test_orthopaedic_shorthand_expansion() {
        // "Orthopedic" (American spelling) lacks the tag substring but
        // contains "orthop".
        let f = facility_with_specialty(Some("Orthopedic Surgery"));
        assert!(matches_filter(&f, Specialty::Orthopaedic));
    }

    #[test]
    fn test_gynaecology_expansions() {
        assert!(matches_filter(
            &facility_with_specialty(Some("Gynaec & Obstetrics")),
            Specialty::Gynaecology
        ));
        assert!(matches_filter(
            &facility_with_specialty(Some("Women's Care")),
            Specialty::Gynaecology
        ));
    }

    #[test]
    fn test_skin_expansions() {
        assert!(matches_filter(
            &facility_with_specialty(Some("Dermatology")),
            Specialty::Skin
        ));
        assert!(matches_filter(
            &facility_with_specialty(Some("Skin Care")),
            Specialty::Skin
        ));
    }

    #[test]
    fn test_medicine_match() {
        assert!(matches_filter(
            &facility_with_specialty(Some("General Medicine")),
            Specialty::Medicine
        ));
        assert!(!matches_filter(
            &facility_with_specialty(Some("Surgery")),
            Specialty::Medicine
        ));
    }

    #[test]
    fn test_unrelated_specialty_does_not_match() {
        let f = facility_with_specialty(Some("Ophthalmology"));
        assert!(!matches_filter(&f, Specialty::Orthopaedic));
        assert!(!matches_filter(&f, Specialty::Gynaecology));
        assert!(!matches_filter(&f, Specialty::Skin));
    }

    // ---- FacilityDirectory ----

    #[test]
    fn test_new_directory_seeds_curated() {
        let dir = directory();
        assert_eq!(dir.facilities().len(), 15);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let dir = directory();
        assert_eq!(dir.filter(Specialty::All).len(), 15);
    }

    #[test]
    fn test_filter_orthopaedic_curated() {
        let dir = directory();
        let hits = dir.filter(Specialty::Orthopaedic);
        let ids: Vec<&str> = hits.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f3", "f5", "a4"]);
    }

    #[test]
    fn test_filter_gynaecology_curated() {
        let dir = directory();
        let ids: Vec<String> = dir
            .filter(Specialty::Gynaecology)
            .into_iter()
            .map(|f| f.id)
            .collect();
        // f1 "Orthopaedic & Womens", f2, f7, a5 "Gynaecology & Obstetrics".
        assert_eq!(ids, vec!["f1", "f2", "f7", "a5"]);
    }

    #[tokio::test]
    async fn test_refresh_failure_falls_back_to_curated() {
        // Nothing listens on the discard port; the query fails.
        let mut dir = directory();
        dir.refresh(Coordinate::new(23.0225, 72.5714)).await;
        assert_eq!(dir.facilities().len(), 15);
        assert!(dir.facilities().iter().all(|f| !f.id.chars().next().unwrap().is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_curated_always_present_after_failed_refresh() {
        let mut dir = directory();
        dir.refresh(Coordinate::new(0.0, 0.0)).await;
        let all = dir.filter(Specialty::All);
        for id in ["f1", "f7", "a1", "a8"] {
            assert!(all.iter().any(|f| f.id == id), "missing curated {}", id);
        }
    }
}
