// ==========================================
// Pensum Planner - Shared Relief Resolution
// ==========================================
// The single rule that turns a function's configuration
// into credited hours. Both the hours aggregation
// (calculator) and the lesson aggregation (breakdown,
// report line items) consume this routine, so the two
// derived views cannot diverge.
// ==========================================

use crate::domain::function::SpecialFunctionDefinition;
use crate::domain::teacher::TeacherProfile;
use crate::domain::types::InputUnit;

/// Lesson-equivalent bookkeeping factor: 1 relief lesson is
/// accounted as 60 hours, independent of literal clock hours.
pub const HOURS_PER_RELIEF_LESSON: f64 = 60.0;

/// Age relief in weekly lessons at the given age:
/// 3 WL from age 60, 1 WL from age 55.
pub fn age_relief_lessons(age: i32) -> f64 {
    if age >= 60 {
        3.0
    } else if age >= 55 {
        1.0
    } else {
        0.0
    }
}

/// Hours credited for one active function on one profile.
///
/// Resolution order:
/// 1. the profile's hour override, if present
/// 2. the catalogue default: relief lessons x 60 for
///    lesson-unit functions, otherwise the default hours
pub fn resolve_function_hours(
    profile: &TeacherProfile,
    definition: &SpecialFunctionDefinition,
) -> f64 {
    if let Some(config) = profile.function_config.get(&definition.id) {
        return config.hours;
    }
    match definition.input_unit {
        InputUnit::Lessons => definition.relief_lessons * HOURS_PER_RELIEF_LESSON,
        InputUnit::Hours => definition.hours,
    }
}
