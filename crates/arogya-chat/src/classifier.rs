//! Location-intent classification for user messages.
//!
//! A message carries a location intent when it contains a proximity cue
//! ("near me", "nearby", ...) and, optionally, a recognizable specialty.
//! Matching is plain case-insensitive substring containment over a fixed
//! ordered synonym table.

use std::sync::LazyLock;

use regex::Regex;

use arogya_core::types::Specialty;

// =============================================================================
// Fixed cue and synonym tables
// =============================================================================

/// Phrases signaling the user wants geographically-local results.
static PROXIMITY_CUES: &[&str] = &["near me", "nearby", "closest", "nearest", "around me"];

static PROXIMITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alts: Vec<String> = PROXIMITY_CUES.iter().map(|c| regex::escape(c)).collect();
    Regex::new(&alts.join("|")).expect("Invalid proximity cue alternation")
});

/// Specialty synonym groups, scanned in this order. Overlapping synonyms
/// across groups resolve to the earlier entry; the ordering is part of the
/// contract, so this stays an explicit slice rather than a map.
static SPECIALTY_TABLE: &[(Specialty, &[&str])] = &[
    (
        Specialty::Orthopaedic,
        &["orthopedic", "orthopaedic", "bone", "joint", "fracture", "ortho"],
    ),
    (
        Specialty::Gynaecology,
        &[
            "gynae",
            "gynecology",
            "gynaecology",
            "women",
            "pregnancy",
            "maternity",
            "obstetr",
        ],
    ),
    (
        Specialty::Multispeciality,
        &["multispeciality", "multi specialty", "general", "all"],
    ),
    (
        Specialty::Medicine,
        &["medicine", "physician", "general medicine", "internal"],
    ),
    (Specialty::Skin, &["skin", "derma", "dermatology"]),
];

/// Generic facility words that still imply a location search when no
/// specialty matched.
static GENERIC_FACILITY_TERMS: &[&str] = &["hospital", "clinic"];

// =============================================================================
// Classification
// =============================================================================

/// A recognized location-search intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationIntent {
    pub specialty: Specialty,
}

/// Classify a user message.
///
/// Returns `None` unless a proximity cue is present. With a cue, the first
/// specialty group (in table order) with any synonym contained in the
/// message wins; a bare "hospital"/"clinic" mention yields [`Specialty::All`].
pub fn classify(message: &str) -> Option<LocationIntent> {
    let lower = message.to_lowercase();
    if lower.trim().is_empty() {
        return None;
    }

    if !PROXIMITY_RE.is_match(&lower) {
        return None;
    }

    for (specialty, synonyms) in SPECIALTY_TABLE {
        if synonyms.iter().any(|syn| lower.contains(syn)) {
            return Some(LocationIntent {
                specialty: *specialty,
            });
        }
    }

    if GENERIC_FACILITY_TERMS.iter().any(|t| lower.contains(t)) {
        return Some(LocationIntent {
            specialty: Specialty::All,
        });
    }

    None
}

// =============================================================================
// Tests
// =============================================================================
