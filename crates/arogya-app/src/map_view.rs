//! Map view presentation: list rendering and facility selection.
//!
//! The selection/annotation logic is pure so it can be tested without a
//! terminal; `main` only prints the strings produced here.

use arogya_core::types::{Coordinate, Facility, SelectedFacility};
use arogya_geo::estimate;

/// Annotate a facility with the travel estimate from the user position.
pub fn annotate(facility: &Facility, position: Coordinate) -> SelectedFacility {
    let travel = estimate(position, facility.coordinate);
    SelectedFacility {
        facility: facility.clone(),
        distance_km: travel.distance_km,
        eta_minutes: travel.eta_minutes,
    }
}

/// Select a facility by 1-based list index, annotated with distance/ETA.
pub fn select(
    facilities: &[Facility],
    index: usize,
    position: Coordinate,
) -> Option<SelectedFacility> {
    if index == 0 {
        return None;
    }
    facilities.get(index - 1).map(|f| annotate(f, position))
}

/// One list line for a facility.
pub fn facility_line(index: usize, facility: &Facility, position: Coordinate) -> String {
    let travel = estimate(position, facility.coordinate);
    let mut line = format!(
        "{:>2}. {} [{}] {:.1} km",
        index, facility.name, facility.kind, travel.distance_km
    );
    if facility.is_featured() {
        line.push_str(" *featured*");
    }
    if let Some(ref specialty) = facility.specialty {
        line.push_str(&format!(" — {}", specialty));
    }
    line
}

/// The full facility list, one line per entry, in directory order.
pub fn render_list(facilities: &[Facility], position: Coordinate) -> String {
    facilities
        .iter()
        .enumerate()
        .map(|(i, f)| facility_line(i + 1, f, position))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Detail block for a selected facility.
pub fn render_selection(selected: &SelectedFacility) -> String {
    let f = &selected.facility;
    let mut lines = vec![format!("{} [{}]", f.name, f.kind)];
    if let Some(ref s) = f.specialty {
        lines.push(format!("  Speciality: {}", s));
    }
    if let Some(ref c) = f.certifications {
        lines.push(format!("  Certifications: {}", c));
    }
    if let Some(ref b) = f.benefit_description {
        lines.push(format!("  Benefit: {}", b));
    }
    if let Some(ref c) = f.cashless_policy {
        lines.push(format!("  Cashless: {}", c));
    }
    if let Some(ref c) = f.contact {
        lines.push(format!("  Contact: {}", c));
    }
    if f.government_card_flags.ayushman {
        lines.push("  Accepts Ayushman Bharat card".to_string());
    }
    if f.government_card_flags.maa {
        lines.push("  Accepts Maa Amrutam card".to_string());
    }
    lines.push(format!(
        "  {:.1} km away, ~{} mins",
        selected.distance_km, selected.eta_minutes
    ));
    lines.join("\n")
}
