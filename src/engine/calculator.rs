// ==========================================
// Pensum Planner - Pensum Calculator
// ==========================================
// The core derivation: profile -> hours/percentage
// breakdown across the 4 work fields. Pure and total;
// recomputed from scratch on every read.
//
// Precondition: base_lessons > 0 for the profile's role.
// A zero or missing entry yields inf/NaN that propagates
// visibly into the pensum percentage; misconfiguration is
// intentionally not masked here.
// ==========================================

use crate::domain::calculation::{CalculationResult, DistributionCategory};
use crate::domain::function::function_ids;
use crate::domain::function::SpecialFunctionDefinition;
use crate::domain::settings::{GlobalSettings, DISTRIBUTION_SHARES};
use crate::domain::teacher::TeacherProfile;
use crate::domain::types::{InputUnit, Role, WorkField};
use crate::engine::relief::{age_relief_lessons, resolve_function_hours, HOURS_PER_RELIEF_LESSON};
use std::collections::BTreeMap;

/// Class-responsibility allowance carved out of the annual hours
/// before deriving the KLP hours-per-lesson factor. Mirrors the
/// default hours of the `sf-klp` standard function.
pub const KLP_CLASS_RESPONSIBILITY_HOURS: f64 = 120.0;

// ==========================================
// PensumCalculator
// ==========================================
pub struct PensumCalculator {
    // Stateless; safe to share across readers without synchronization.
}

impl PensumCalculator {
    pub fn new() -> Self {
        Self {}
    }

    /// Hours-per-lesson factor for a role.
    ///
    /// KLP: (annual_hours - 120) / base_lessons, the 120h allowance
    /// being credited separately through the standard function.
    /// All other roles: annual_hours / base_lessons.
    pub fn hours_per_lesson(&self, settings: &GlobalSettings, role: Role) -> f64 {
        let base_lessons = settings.base_lessons_for(role);
        match role {
            Role::Klp => (settings.annual_hours - KLP_CLASS_RESPONSIBILITY_HOURS) / base_lessons,
            _ => settings.annual_hours / base_lessons,
        }
    }

    /// Full calculation for one (reconciled) profile.
    pub fn calculate(
        &self,
        profile: &TeacherProfile,
        settings: &GlobalSettings,
        definitions: &[SpecialFunctionDefinition],
        reference_year: i32,
    ) -> CalculationResult {
        // 1./2. Base hours from the role factor
        let hours_per_lesson = self.hours_per_lesson(settings, profile.role);
        let total_base_hours = profile.teaching_lessons * hours_per_lesson;

        // 3. Seed the 4 categories with the fixed split
        let mut base_hours_by_field: BTreeMap<WorkField, f64> = BTreeMap::new();
        let mut distribution: Vec<DistributionCategory> = DISTRIBUTION_SHARES
            .iter()
            .map(|(field, share)| {
                let base = total_base_hours * share;
                base_hours_by_field.insert(*field, base);
                DistributionCategory {
                    work_field: *field,
                    hours: base,
                    correction: 0.0,
                    manual_correction_only: 0.0,
                }
            })
            .collect();

        // 4. Special functions (age relief handled separately)
        for id in &profile.active_special_functions {
            if id == function_ids::AGE_RELIEF {
                continue;
            }
            let Some(def) = definitions.iter().find(|d| &d.id == id) else {
                // Unknown id: a stale entry, skipped fail-open.
                tracing::debug!(function_id = %id, "active function has no catalogue entry, skipped");
                continue;
            };
            let hours_to_add = resolve_function_hours(profile, def);
            if hours_to_add > 0.0 {
                Self::credit(&mut distribution, def.work_field, hours_to_add);
            }
        }

        // 5. Age relief, always derived fresh from the reference year
        let age = profile.age_at(reference_year);
        let age_relief_hours = age_relief_lessons(age) * HOURS_PER_RELIEF_LESSON;
        if age_relief_hours > 0.0 {
            Self::credit(&mut distribution, WorkField::Teacher, age_relief_hours);
        }

        // 6. Custom functions
        for custom in &profile.custom_functions {
            let hours_to_add = match custom.unit {
                InputUnit::Lessons => custom.value * HOURS_PER_RELIEF_LESSON,
                InputUnit::Hours => custom.value,
            };
            if hours_to_add > 0.0 {
                Self::credit(&mut distribution, custom.work_field, hours_to_add);
            }
        }

        // 7. Manual corrections, signed and unclamped
        for category in distribution.iter_mut() {
            let delta = profile
                .manual_corrections
                .get(&category.work_field)
                .copied()
                .unwrap_or(0.0);
            if delta != 0.0 {
                category.hours += delta;
                category.correction += delta;
                category.manual_correction_only = delta;
            }
        }

        // 8. Totals
        let total_hours: f64 = distribution.iter().map(|c| c.hours).sum();
        let pensum_percentage = total_hours / settings.annual_hours * 100.0;

        CalculationResult {
            distribution,
            total_hours,
            pensum_percentage,
            base_hours_by_field,
        }
    }

    fn credit(distribution: &mut [DistributionCategory], field: WorkField, hours: f64) {
        // All 4 fields are seeded in step 3, so the lookup always hits.
        if let Some(category) = distribution.iter_mut().find(|c| c.work_field == field) {
            category.hours += hours;
            category.correction += hours;
        }
    }
}

impl Default for PensumCalculator {
    fn default() -> Self {
        Self::new()
    }
}
