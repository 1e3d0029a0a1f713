//! Roster service configuration structures.

use serde::{Deserialize, Serialize};

/// Store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackendConfig {
    /// In-memory store for development/testing.
    Memory,
    /// Postgres store.
    Postgres,
}

/// Audit backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditBackendConfig {
    /// No audit trail.
    None,
    /// Bounded in-memory audit buffer.
    Memory,
    /// Postgres audit log.
    Postgres,
}

/// Root roster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Store backend selection.
    pub store: StoreBackendConfig,
    /// Audit backend selection.
    pub audit: AuditBackendConfig,
    /// Buffer bound for the in-memory audit backend.
    pub max_audit_events: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            store: StoreBackendConfig::Memory,
            audit: AuditBackendConfig::None,
            max_audit_events: 1024,
        }
    }
}

impl RosterConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.audit == AuditBackendConfig::Memory && self.max_audit_events == 0 {
            return Err("max_audit_events must be greater than 0 for the memory audit backend".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a message for parse failures or invalid values.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the environment. Reads `.env` via dotenvy,
    /// then parses the `ROSTER_CONFIG` variable as JSON; absent that,
    /// returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns a message when `ROSTER_CONFIG` is set but does not parse or
    /// validate.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        match std::env::var("ROSTER_CONFIG") {
            Ok(raw) => Self::from_json_str(&raw),
            Err(_) => Ok(Self::default()),
        }
    }
}
