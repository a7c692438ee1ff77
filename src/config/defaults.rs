// ==========================================
// Pensum Planner - Built-in Defaults
// ==========================================
// Baseline settings, the initial special-function
// catalogue and the initial profile, per the Glarus
// workload model. Administrative edits in config_kv
// override everything here.
// ==========================================

use crate::domain::agreement::Folder;
use crate::domain::function::{function_ids, FunctionConfig, SpecialFunctionDefinition};
use crate::domain::settings::GlobalSettings;
use crate::domain::teacher::TeacherProfile;
use crate::domain::types::{AllowedRoles, InputUnit, Municipality, Role, WorkField};
use std::collections::BTreeMap;

/// School-year reference year for age calculations, used when no
/// `reference_year` is configured. Threaded explicitly into every
/// age-dependent call; never read ad hoc at call sites.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2026;

/// Baseline: 1890 annual hours; KLP 26 WL (plus 120h
/// Klassenverantwortung), all other roles 28 WL.
pub fn global_settings() -> GlobalSettings {
    let mut base_lessons = BTreeMap::new();
    base_lessons.insert(Role::Klp, 26.0);
    base_lessons.insert(Role::Flp, 28.0);
    base_lessons.insert(Role::Shp, 28.0);
    base_lessons.insert(Role::Daz, 28.0);
    GlobalSettings {
        annual_hours: 1890.0,
        base_lessons,
    }
}

/// The initial special-function catalogue.
pub fn special_functions() -> Vec<SpecialFunctionDefinition> {
    vec![
        SpecialFunctionDefinition {
            id: function_ids::KLP_STANDARD.to_string(),
            name: "Klassenverantwortung (Standard)".to_string(),
            relief_lessons: 0.0,
            hours: 120.0,
            work_field: WorkField::TeachingAndClass,
            allowed_roles: AllowedRoles::Only(Role::Klp),
            is_standard: true,
            input_unit: InputUnit::Hours,
        },
        SpecialFunctionDefinition {
            id: function_ids::SHP_STANDARD.to_string(),
            name: "Koordination & Absprachen (SHP)".to_string(),
            relief_lessons: 0.0,
            // 120h, reduced to 60h for a single class
            hours: 120.0,
            work_field: WorkField::TeachingAndClass,
            allowed_roles: AllowedRoles::Only(Role::Shp),
            is_standard: true,
            input_unit: InputUnit::Hours,
        },
        SpecialFunctionDefinition {
            id: function_ids::DAZ_STANDARD.to_string(),
            name: "Koordination & Absprachen (DaZ)".to_string(),
            relief_lessons: 0.0,
            hours: 120.0,
            work_field: WorkField::TeachingAndClass,
            allowed_roles: AllowedRoles::Only(Role::Daz),
            is_standard: true,
            input_unit: InputUnit::Hours,
        },
        SpecialFunctionDefinition {
            id: function_ids::FLP_STANDARD.to_string(),
            name: "Absprachen Fachlehrperson".to_string(),
            relief_lessons: 0.0,
            hours: 60.0,
            work_field: WorkField::TeachingAndClass,
            allowed_roles: AllowedRoles::Only(Role::Flp),
            is_standard: true,
            input_unit: InputUnit::Hours,
        },
        SpecialFunctionDefinition {
            id: "sf-picts".to_string(),
            name: "IT-Support / PICTS".to_string(),
            relief_lessons: 1.0,
            hours: 60.0,
            work_field: WorkField::School,
            allowed_roles: AllowedRoles::All,
            is_standard: false,
            input_unit: InputUnit::Lessons,
        },
        SpecialFunctionDefinition {
            id: function_ids::AGE_RELIEF.to_string(),
            name: "Altersentlastung".to_string(),
            // Relief is derived from the birth year, never from here.
            relief_lessons: 0.0,
            hours: 0.0,
            work_field: WorkField::Teacher,
            allowed_roles: AllowedRoles::All,
            is_standard: false,
            input_unit: InputUnit::Lessons,
        },
        SpecialFunctionDefinition {
            id: "sf-health".to_string(),
            name: "Gesundheitsförderung".to_string(),
            relief_lessons: 0.5,
            hours: 32.0,
            work_field: WorkField::School,
            allowed_roles: AllowedRoles::All,
            is_standard: false,
            input_unit: InputUnit::Hours,
        },
        SpecialFunctionDefinition {
            id: "sf-mentor".to_string(),
            name: "Mentor/in Berufseinstieg".to_string(),
            relief_lessons: 0.5,
            hours: 30.0,
            work_field: WorkField::Teacher,
            allowed_roles: AllowedRoles::All,
            is_standard: false,
            input_unit: InputUnit::Lessons,
        },
        SpecialFunctionDefinition {
            id: "sf-media".to_string(),
            name: "Medienmentorat".to_string(),
            relief_lessons: 1.0,
            hours: 60.0,
            work_field: WorkField::School,
            allowed_roles: AllowedRoles::All,
            is_standard: false,
            input_unit: InputUnit::Lessons,
        },
        SpecialFunctionDefinition {
            id: "sf-bgm".to_string(),
            name: "Beauftragte/r Qualitätsmanagement".to_string(),
            relief_lessons: 1.0,
            hours: 63.0,
            work_field: WorkField::School,
            allowed_roles: AllowedRoles::All,
            is_standard: false,
            input_unit: InputUnit::Hours,
        },
    ]
}

/// Initial profile for a new agreement: full-time KLP with the
/// standard function attached and the standard overrides seeded.
pub fn teacher_profile() -> TeacherProfile {
    let mut function_config = BTreeMap::new();
    function_config.insert(
        function_ids::KLP_STANDARD.to_string(),
        FunctionConfig::with_hours(120.0),
    );
    function_config.insert(
        function_ids::SHP_STANDARD.to_string(),
        FunctionConfig {
            hours: 120.0,
            single_class: Some(false),
        },
    );
    function_config.insert(
        function_ids::DAZ_STANDARD.to_string(),
        FunctionConfig {
            hours: 120.0,
            single_class: Some(false),
        },
    );
    function_config.insert(
        function_ids::FLP_STANDARD.to_string(),
        FunctionConfig::with_hours(60.0),
    );

    TeacherProfile {
        municipality: Municipality::Glarus,
        last_name: String::new(),
        first_name: String::new(),
        birth_year: 1985,
        role: Role::Klp,
        teaching_lessons: 26.0,
        active_special_functions: vec![function_ids::KLP_STANDARD.to_string()],
        function_config,
        custom_functions: Vec::new(),
        manual_corrections: BTreeMap::new(),
        remarks: String::new(),
    }
}

/// Initial dashboard folders.
pub fn folders() -> Vec<Folder> {
    vec![
        Folder {
            id: "default".to_string(),
            name: "Allgemein".to_string(),
        },
        Folder {
            id: "sj2627".to_string(),
            name: "Schuljahr 2026/27".to_string(),
        },
    ]
}
