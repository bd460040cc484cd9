//! Core types, configuration, and errors shared across the Arogya client.
//!
//! Domain types live in [`types`], TOML-backed configuration in [`config`],
//! and the top-level error enum in [`error`].

pub mod config;
pub mod error;
pub mod types;

pub use config::ArogyaConfig;
pub use error::{ArogyaError, Result};
pub use types::{
    BroadcastRecord, Coordinate, Facility, FacilityKind, GovernmentCards, HistoryEntry,
    InboxMessage, Message, SelectedFacility, Specialty,
};
