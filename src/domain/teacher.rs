// ==========================================
// Pensum Planner - Teacher Profile
// ==========================================
// The mutable input record for one agreement period.
// Mutations to role or birth year must be followed by a
// reconciliation pass (engine::activation) before the
// profile is handed to the calculator.
// ==========================================

use crate::domain::function::{CustomFunction, FunctionConfig};
use crate::domain::types::{Municipality, Role, WorkField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One teacher's situation for one agreement period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherProfile {
    pub municipality: Municipality,
    pub last_name: String,
    pub first_name: String,
    pub birth_year: i32,
    pub role: Role,
    /// Weekly teaching lessons (WL).
    pub teaching_lessons: f64,
    /// Ids of active catalogue functions, insertion-ordered.
    pub active_special_functions: Vec<String>,
    /// Per-function hour overrides and metadata.
    pub function_config: BTreeMap<String, FunctionConfig>,
    /// Free-form duties outside the catalogue.
    pub custom_functions: Vec<CustomFunction>,
    /// Signed hour deltas per work field; never clamped.
    pub manual_corrections: BTreeMap<WorkField, f64>,
    pub remarks: String,
}

impl TeacherProfile {
    pub fn is_function_active(&self, id: &str) -> bool {
        self.active_special_functions.iter().any(|f| f == id)
    }

    /// Age at the given reference year.
    pub fn age_at(&self, reference_year: i32) -> i32 {
        reference_year - self.birth_year
    }
}
