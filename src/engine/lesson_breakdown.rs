// ==========================================
// Pensum Planner - Lesson Breakdown
// ==========================================
// The lesson-denominated view of the same profile the
// calculator aggregates in hours. Every line item is
// derived through the shared relief routine, so
// (total_lessons - teaching_lessons) * 60 reconciles
// exactly with the lesson-unit portion of the
// calculator's corrections.
// ==========================================

use crate::domain::calculation::{LessonBreakdown, LessonItem};
use crate::domain::function::{function_ids, SpecialFunctionDefinition};
use crate::domain::teacher::TeacherProfile;
use crate::domain::types::InputUnit;
use crate::engine::relief::{age_relief_lessons, resolve_function_hours, HOURS_PER_RELIEF_LESSON};

// ==========================================
// LessonBreakdownEngine
// ==========================================
pub struct LessonBreakdownEngine {
    // Stateless.
}

impl LessonBreakdownEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// Lesson view: teaching lessons plus every lesson-unit relief
    /// (age relief, lesson-unit catalogue functions, lesson-unit
    /// custom duties).
    pub fn breakdown(
        &self,
        profile: &TeacherProfile,
        definitions: &[SpecialFunctionDefinition],
        reference_year: i32,
    ) -> LessonBreakdown {
        let mut items: Vec<LessonItem> = Vec::new();

        // 1. Age relief
        let age = profile.age_at(reference_year);
        let relief = age_relief_lessons(age);
        if relief > 0.0 {
            let name = definitions
                .iter()
                .find(|d| d.id == function_ids::AGE_RELIEF)
                .map(|d| d.name.as_str())
                .unwrap_or("Altersentlastung");
            items.push(LessonItem {
                name: format!("{} ({} Jahre)", name, age),
                lessons: relief,
            });
        }

        // 2. Lesson-unit catalogue functions
        for id in &profile.active_special_functions {
            if id == function_ids::AGE_RELIEF {
                continue;
            }
            let Some(def) = definitions.iter().find(|d| &d.id == id) else {
                continue;
            };
            if def.input_unit != InputUnit::Lessons {
                continue;
            }
            let lessons = resolve_function_hours(profile, def) / HOURS_PER_RELIEF_LESSON;
            if lessons > 0.0 {
                items.push(LessonItem {
                    name: def.name.clone(),
                    lessons,
                });
            }
        }

        // 3. Lesson-unit custom duties
        for custom in &profile.custom_functions {
            if custom.unit == InputUnit::Lessons && custom.value > 0.0 {
                items.push(LessonItem {
                    name: custom.name.clone(),
                    lessons: custom.value,
                });
            }
        }

        let additional: f64 = items.iter().map(|i| i.lessons).sum();
        LessonBreakdown {
            teaching_lessons: profile.teaching_lessons,
            total_lessons: profile.teaching_lessons + additional,
            items,
        }
    }
}

impl Default for LessonBreakdownEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::domain::function::CustomFunction;
    use crate::domain::types::WorkField;

    const REFERENCE_YEAR: i32 = 2026;

    fn breakdown(profile: &TeacherProfile) -> LessonBreakdown {
        LessonBreakdownEngine::new().breakdown(
            profile,
            &defaults::special_functions(),
            REFERENCE_YEAR,
        )
    }

    #[test]
    fn test_plain_profile_has_no_items() {
        let mut profile = defaults::teacher_profile();
        profile.active_special_functions.clear();
        let result = breakdown(&profile);
        assert!(result.items.is_empty());
        assert_eq!(result.total_lessons, 26.0);
    }

    #[test]
    fn test_hours_unit_standard_function_not_listed() {
        // sf-klp is credited in hours; the lesson view ignores it.
        let profile = defaults::teacher_profile();
        let result = breakdown(&profile);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_age_relief_listed_with_age() {
        let mut profile = defaults::teacher_profile();
        profile.birth_year = 1970; // age 56
        profile.active_special_functions.push("sf-age".to_string());
        let result = breakdown(&profile);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].lessons, 1.0);
        assert!(result.items[0].name.contains("56 Jahre"));
        assert_eq!(result.total_lessons, 27.0);
    }

    #[test]
    fn test_lesson_unit_function_and_custom_duty() {
        let mut profile = defaults::teacher_profile();
        profile.active_special_functions.clear();
        profile.active_special_functions.push("sf-picts".to_string());
        profile.custom_functions.push(CustomFunction {
            id: "custom-1".to_string(),
            name: "Schulgarten".to_string(),
            value: 0.5,
            unit: InputUnit::Lessons,
            work_field: WorkField::School,
        });
        let result = breakdown(&profile);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.total_lessons, 26.0 + 1.0 + 0.5);
    }

    #[test]
    fn test_override_reflected_in_lessons() {
        let mut profile = defaults::teacher_profile();
        profile.active_special_functions.clear();
        profile.active_special_functions.push("sf-picts".to_string());
        profile.function_config.insert(
            "sf-picts".to_string(),
            crate::domain::function::FunctionConfig::with_hours(120.0),
        );
        let result = breakdown(&profile);
        assert_eq!(result.items[0].lessons, 2.0);
    }
}
