use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ArogyaError, Result};

/// Top-level configuration for the Arogya client.
///
/// Loaded from `~/.arogya/config.toml` by default. Each section corresponds
/// to a component or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArogyaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub broadcast: BroadcastConfig,
}

impl ArogyaConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ArogyaConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ArogyaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Base URL of the backend API. All endpoint paths are relative to this.
    pub api_base_url: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Directory for the session transcript cache.
    pub session_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            log_level: "info".to_string(),
            session_dir: "~/.arogya/session".to_string(),
        }
    }
}

/// Chat assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// The fixed message shown when a session starts fresh.
    pub welcome_message: String,
    /// Pause before navigating to the map after a redirect message, so the
    /// user can read it. Milliseconds.
    pub redirect_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            welcome_message: "Hello! I'm Arogya. Ask me anything about medicines, safety, \
                              or interactions. You can also ask me to find hospitals near \
                              you - try 'orthopedic hospital near me'!"
                .to_string(),
            redirect_delay_ms: 1500,
        }
    }
}

/// Geolocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Fallback latitude used when no position can be acquired.
    pub default_lat: f64,
    /// Fallback longitude used when no position can be acquired.
    pub default_lon: f64,
    /// How long to wait for a position fix before falling back. Seconds.
    pub timeout_secs: u64,
    /// Operator-pinned latitude. When set (with `fixed_lon`), the client
    /// reports this position instead of consulting a position source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_lat: Option<f64>,
    /// Operator-pinned longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_lon: Option<f64>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default_lat: 23.0225,
            default_lon: 72.5714,
            timeout_secs: 5,
            fixed_lat: None,
            fixed_lon: None,
        }
    }
}

/// Facility directory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Amenity-query interpreter endpoint.
    pub amenity_url: String,
    /// Search radius around the query center. Meters.
    pub radius_m: u32,
    /// Map-view fallback latitude when no position can be acquired.
    pub map_fallback_lat: f64,
    /// Map-view fallback longitude.
    pub map_fallback_lon: f64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            amenity_url: "https://overpass-api.de/api/interpreter".to_string(),
            radius_m: 5000,
            map_fallback_lat: 22.55,
            map_fallback_lon: 72.95,
        }
    }
}

/// Broadcast console settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Authority sources the operator can attach to a broadcast.
    pub sources: Vec<String>,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                "Arogya Safety Team".to_string(),
                "FDA".to_string(),
                "WHO".to_string(),
                "Ministry of Health".to_string(),
            ],
        }
    }
}
