// ==========================================
// Pensum Planner - Configuration Manager
// ==========================================
// Administrative configuration: annual-hours baseline,
// per-role base lessons, reference year and the
// special-function catalogue.
// Storage: config_kv table (scope_id = 'global').
//
// Reads fall back to the built-in defaults; the catalogue
// is validated through the closed domain enums at load,
// so a work-field typo fails here instead of silently
// dropping hours at calculation time.
// ==========================================

use crate::config::defaults;
use crate::db::{configure_connection, open_connection};
use crate::domain::function::SpecialFunctionDefinition;
use crate::domain::settings::GlobalSettings;
use crate::domain::types::Role;
use rusqlite::{params, Connection};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

// ==========================================
// Error type
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("database lock failed: {0}")]
    Lock(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("invalid catalogue (key={key}): {message}")]
    InvalidCatalogue { key: String, message: String },

    #[error("invalid value (key={key}): {message}")]
    InvalidValue { key: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// Configuration keys
// ==========================================
pub mod config_keys {
    /// Annual working hours (100% baseline)
    pub const ANNUAL_HOURS: &str = "annual_hours";
    /// Per-role base lessons, one key per role
    pub const BASE_LESSONS_PREFIX: &str = "base_lessons/";
    /// Reference year for age calculations - the single source
    /// replacing the per-call-site literals
    pub const REFERENCE_YEAR: &str = "reference_year";
    /// Special-function catalogue (JSON array)
    pub const SPECIAL_FUNCTIONS: &str = "special_functions";
}

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Reuse an existing connection; reapplies the unified PRAGMA
    /// set (idempotent) so behavior matches freshly opened ones.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> ConfigResult<Self> {
        {
            let guard = conn.lock().map_err(|e| ConfigError::Lock(e.to_string()))?;
            configure_connection(&guard)?;
        }
        Ok(Self { conn })
    }

    // ==========================================
    // Key-value primitives
    // ==========================================

    fn get_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;
        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    fn get_f64_or(&self, key: &str, default: f64) -> ConfigResult<f64> {
        match self.get_value(key)? {
            None => Ok(default),
            Some(raw) => Ok(raw.parse::<f64>().unwrap_or_else(|_| {
                tracing::warn!(config_key = key, raw_value = %raw, "malformed number, using default");
                default
            })),
        }
    }

    // ==========================================
    // Typed configuration surface
    // ==========================================

    /// Baseline settings, merged over the built-in defaults.
    pub fn get_global_settings(&self) -> ConfigResult<GlobalSettings> {
        let built_in = defaults::global_settings();
        let annual_hours = self.get_f64_or(config_keys::ANNUAL_HOURS, built_in.annual_hours)?;

        let mut base_lessons: BTreeMap<Role, f64> = BTreeMap::new();
        for role in Role::ALL {
            let key = format!("{}{}", config_keys::BASE_LESSONS_PREFIX, role.as_str());
            let value = self.get_f64_or(&key, built_in.base_lessons_for(role))?;
            base_lessons.insert(role, value);
        }

        Ok(GlobalSettings {
            annual_hours,
            base_lessons,
        })
    }

    pub fn set_global_settings(&self, settings: &GlobalSettings) -> ConfigResult<()> {
        if !(settings.annual_hours > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::ANNUAL_HOURS.to_string(),
                message: format!("annual hours must be positive, got {}", settings.annual_hours),
            });
        }
        for role in Role::ALL {
            let lessons = settings.base_lessons_for(role);
            if !(lessons > 0.0) {
                return Err(ConfigError::InvalidValue {
                    key: format!("{}{}", config_keys::BASE_LESSONS_PREFIX, role.as_str()),
                    message: format!("base lessons for {} must be positive, got {}", role, lessons),
                });
            }
        }

        self.set_value(config_keys::ANNUAL_HOURS, &settings.annual_hours.to_string())?;
        for role in Role::ALL {
            let key = format!("{}{}", config_keys::BASE_LESSONS_PREFIX, role.as_str());
            self.set_value(&key, &settings.base_lessons_for(role).to_string())?;
        }
        Ok(())
    }

    /// Reference year for all age-dependent derivations.
    pub fn get_reference_year(&self) -> ConfigResult<i32> {
        match self.get_value(config_keys::REFERENCE_YEAR)? {
            None => Ok(defaults::DEFAULT_REFERENCE_YEAR),
            Some(raw) => Ok(raw.parse::<i32>().unwrap_or_else(|_| {
                tracing::warn!(raw_value = %raw, "malformed reference year, using default");
                defaults::DEFAULT_REFERENCE_YEAR
            })),
        }
    }

    pub fn set_reference_year(&self, year: i32) -> ConfigResult<()> {
        self.set_value(config_keys::REFERENCE_YEAR, &year.to_string())
    }

    /// The special-function catalogue. A stored catalogue that does
    /// not deserialize through the closed domain enums is rejected
    /// outright (fail-fast), never silently repaired.
    pub fn get_special_functions(&self) -> ConfigResult<Vec<SpecialFunctionDefinition>> {
        match self.get_value(config_keys::SPECIAL_FUNCTIONS)? {
            None => Ok(defaults::special_functions()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| ConfigError::InvalidCatalogue {
                key: config_keys::SPECIAL_FUNCTIONS.to_string(),
                message: e.to_string(),
            }),
        }
    }

    pub fn set_special_functions(
        &self,
        definitions: &[SpecialFunctionDefinition],
    ) -> ConfigResult<()> {
        for (i, a) in definitions.iter().enumerate() {
            if a.id.trim().is_empty() {
                return Err(ConfigError::InvalidCatalogue {
                    key: config_keys::SPECIAL_FUNCTIONS.to_string(),
                    message: format!("function '{}' has an empty id", a.name),
                });
            }
            if definitions.iter().skip(i + 1).any(|b| b.id == a.id) {
                return Err(ConfigError::InvalidCatalogue {
                    key: config_keys::SPECIAL_FUNCTIONS.to_string(),
                    message: format!("duplicate function id '{}'", a.id),
                });
            }
        }
        let json = serde_json::to_string(definitions).map_err(|e| ConfigError::InvalidCatalogue {
            key: config_keys::SPECIAL_FUNCTIONS.to_string(),
            message: e.to_string(),
        })?;
        self.set_value(config_keys::SPECIAL_FUNCTIONS, &json)
    }
}
