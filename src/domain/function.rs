// ==========================================
// Pensum Planner - Special Function Catalogue Entities
// ==========================================
// Catalogue definitions are administrative data; the
// per-teacher override lives in FunctionConfig on the
// profile, never on the definition itself.
// ==========================================

use crate::domain::types::{AllowedRoles, InputUnit, WorkField};
use serde::{Deserialize, Serialize};

// ==========================================
// Well-known catalogue ids
// ==========================================
// The activation policy and the engines treat these ids
// specially; everything else in the catalogue is opaque.
pub mod function_ids {
    /// Klassenverantwortung (standard, KLP)
    pub const KLP_STANDARD: &str = "sf-klp";
    /// Absprachen Fachlehrperson (standard, FLP)
    pub const FLP_STANDARD: &str = "sf-flp";
    /// Koordination & Absprachen (standard, SHP)
    pub const SHP_STANDARD: &str = "sf-shp";
    /// Koordination & Absprachen (standard, DaZ)
    pub const DAZ_STANDARD: &str = "sf-daz";
    /// Altersentlastung - derived from birth year, never user-toggled
    pub const AGE_RELIEF: &str = "sf-age";
}

// ==========================================
// SpecialFunctionDefinition
// ==========================================
/// One catalogue entry for an optional special duty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialFunctionDefinition {
    /// Unique catalogue id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Default relief in weekly lessons.
    #[serde(default)]
    pub relief_lessons: f64,
    /// Default hours credited when active.
    pub hours: f64,
    /// Work field the credited hours are booked into.
    pub work_field: WorkField,
    /// Role restriction.
    pub allowed_roles: AllowedRoles,
    /// Standard functions are attached/detached by the activation
    /// policy on role change and are not user-toggleable.
    #[serde(default)]
    pub is_standard: bool,
    /// Unit of the entry field shown for this function.
    #[serde(default)]
    pub input_unit: InputUnit,
}

// ==========================================
// FunctionConfig (per-teacher override)
// ==========================================
/// Resolved hours for one active function on one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionConfig {
    /// Hours actually credited (overrides the catalogue default).
    pub hours: f64,
    /// SHP/DaZ coordination covering a single class credits 60h
    /// instead of 120h.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_class: Option<bool>,
}

impl FunctionConfig {
    pub fn with_hours(hours: f64) -> Self {
        Self {
            hours,
            single_class: None,
        }
    }
}

// ==========================================
// CustomFunction (free-form duty)
// ==========================================
/// Ad-hoc duty entered by the user, outside the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFunction {
    pub id: String,
    pub name: String,
    /// Numeric value in `unit`.
    pub value: f64,
    pub unit: InputUnit,
    pub work_field: WorkField,
}
