//! Domain types shared across the Arogya client.
//!
//! These mirror the shapes exchanged with the backend and the persisted
//! session cache, so the serde field names follow the wire spelling
//! (camelCase) where a stored or transmitted form exists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Specialty tag classifying a facility's or an intent's medical focus.
///
/// `All` is the generic tag: it filters nothing and is omitted from map
/// routes. The string forms are lowercase and round-trip through serde,
/// `FromStr`, and `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialty {
    Orthopaedic,
    Gynaecology,
    Multispeciality,
    Medicine,
    Skin,
    All,
}

impl Specialty {
    /// The lowercase tag used in routes, filters, and stored messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Orthopaedic => "orthopaedic",
            Specialty::Gynaecology => "gynaecology",
            Specialty::Multispeciality => "multispeciality",
            Specialty::Medicine => "medicine",
            Specialty::Skin => "skin",
            Specialty::All => "all",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "orthopaedic" => Ok(Specialty::Orthopaedic),
            "gynaecology" => Ok(Specialty::Gynaecology),
            "multispeciality" => Ok(Specialty::Multispeciality),
            "medicine" => Ok(Specialty::Medicine),
            "skin" => Ok(Specialty::Skin),
            "all" => Ok(Specialty::All),
            other => Err(format!("unknown specialty tag: {}", other)),
        }
    }
}

/// A geographic coordinate pair. Value type, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether the pair lies in the valid lat/lon ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// One entry in the conversation transcript.
///
/// Serialized to the session cache with the stored field spelling, so a
/// transcript written by any client revision restores cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub text: String,
    pub is_user: bool,
    /// Set on the synthetic assistant message that precedes a map redirect.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_map_redirect: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,
}

impl Message {
    /// A plain user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
            is_map_redirect: false,
            specialty: None,
        }
    }

    /// A plain assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
            is_map_redirect: false,
            specialty: None,
        }
    }

    /// The synthetic assistant message announcing a map redirect.
    pub fn map_redirect(text: impl Into<String>, specialty: Specialty) -> Self {
        Self {
            text: text.into(),
            is_user: false,
            is_map_redirect: true,
            specialty: Some(specialty),
        }
    }
}

/// Facility category from the amenity data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityKind {
    Hospital,
    Pharmacy,
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityKind::Hospital => f.write_str("Hospital"),
            FacilityKind::Pharmacy => f.write_str("Pharmacy"),
        }
    }
}

/// Government health-card acceptance flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentCards {
    pub ayushman: bool,
    pub maa: bool,
}

/// A directory entry: either curated (stable `f*`/`a*` id) or fetched from
/// the amenity source (numeric id, ephemeral per query).
///
/// Invariant: `name` and a valid `coordinate` are always present; records
/// failing this are dropped before entering the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub kind: FacilityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashless_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit_description: Option<String>,
    #[serde(default)]
    pub government_card_flags: GovernmentCards,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_city: Option<String>,
}

impl Facility {
    /// Featured entries (the `f*` id range) are highlighted on the map.
    pub fn is_featured(&self) -> bool {
        self.id.starts_with('f')
    }
}

/// A facility the user has selected, annotated with the travel estimate
/// from the current user coordinate. Recomputed on re-selection or when the
/// user position changes materially.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFacility {
    pub facility: Facility,
    pub distance_km: f64,
    pub eta_minutes: u32,
}

/// One sent broadcast, held only in memory for the operator's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastRecord {
    pub message: String,
    pub source: String,
    /// `HH:MM` local time.
    pub timestamp: String,
    /// `YYYY-MM-DD` local date.
    pub date: String,
}

/// One message in the operator inbox, as returned by the messaging bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxMessage {
    pub sender: String,
    pub message: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_broadcast: bool,
}

/// One stored consultation, as returned by `GET /history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub message: String,
    pub response: String,
    pub timestamp: String,
}
