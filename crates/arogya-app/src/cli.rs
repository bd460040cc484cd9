//! CLI argument definitions for the Arogya client.
//!
//! Uses `clap` with derive macros. Subcommands mirror the product's route
//! surface: auth, chat, map, and the operator console.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arogya — a health-assistant client: chat, nearby facilities, alerts.
#[derive(Parser, Debug)]
#[command(name = "arogya", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in to the assistant backend.
    Login {
        #[arg(long)]
        email: String,
    },
    /// Create an account.
    Register {
        #[arg(long)]
        email: String,
    },
    /// End the backend session.
    Logout,
    /// Converse with the assistant.
    Chat,
    /// Browse nearby medical facilities.
    Map {
        /// Specialty tag to filter by (orthopaedic, gynaecology,
        /// multispeciality, medicine, skin).
        #[arg(long)]
        specialty: Option<String>,
    },
    /// Operator broadcast console.
    Admin,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > AROGYA_CONFIG env var > platform default
    /// (~/.arogya/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("AROGYA_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    /// Returns `None` if not overridden.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".arogya").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".arogya").join("config.toml");
    }
    PathBuf::from("config.toml")
}
