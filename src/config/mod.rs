// ==========================================
// Pensum Planner - Configuration Layer
// ==========================================

pub mod config_manager;
pub mod defaults;

pub use config_manager::{config_keys, ConfigError, ConfigManager, ConfigResult};
