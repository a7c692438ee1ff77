// ==========================================
// Pensum Planner - Core library
// ==========================================
// Workload planning for teaching staff: pensum
// calculation, special functions, age relief and
// saved agreement management on SQLite.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Engine layer - business rules
pub mod engine;

// Configuration layer
pub mod config;

// Database infrastructure (connection setup, PRAGMAs, schema)
pub mod db;

// Logging
pub mod logging;

// API layer - business interfaces
pub mod api;

// Application layer - wiring
pub mod app;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{AllowedRoles, InputUnit, Municipality, Role, WorkField};

// Domain entities
pub use domain::{
    CalculationResult, CustomFunction, Folder, FunctionConfig, GlobalSettings, LessonBreakdown,
    SavedAgreement, SpecialFunctionDefinition, TeacherProfile,
};

// Engines
pub use engine::{
    FunctionActivationPolicy, LessonBreakdownEngine, PensumCalculator, HOURS_PER_RELIEF_LESSON,
};

// API
pub use api::{DashboardApi, PlannerApi, ReportApi, SettingsApi};

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Pensum Planner";

// Database schema version
pub const DB_VERSION: &str = "v0.1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
        assert!(!APP_NAME.is_empty());
    }
}
