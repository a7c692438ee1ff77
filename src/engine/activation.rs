// ==========================================
// Pensum Planner - Function Activation Policy
// ==========================================
// Keeps the active-function set consistent with the
// profile's role and age. Pure, deterministic and
// idempotent; the caller invokes it synchronously after
// every mutation of role, birth year or reference year,
// never as part of a display refresh.
// ==========================================

use crate::domain::function::{function_ids, FunctionConfig, SpecialFunctionDefinition};
use crate::domain::teacher::TeacherProfile;
use crate::domain::types::AllowedRoles;
use crate::engine::relief::age_relief_lessons;

// ==========================================
// FunctionActivationPolicy
// ==========================================
pub struct FunctionActivationPolicy {
    // Stateless; all inputs are passed per call.
}

impl FunctionActivationPolicy {
    pub fn new() -> Self {
        Self {}
    }

    /// Reconcile the profile's active-function set.
    ///
    /// Rules, in order:
    /// 1. Standard-function exclusivity: drop standard functions of
    ///    other roles, attach the current role's standard function
    ///    (seeding its config with the catalogue default hours).
    /// 2. Age relief (`sf-age`) is active exactly when the relief
    ///    lesson count at `reference_year` is positive; manual
    ///    toggles are overridden.
    /// 3. Every other membership persists. Stale duplicate entries
    ///    are collapsed; the policy converges instead of failing.
    pub fn reconcile(
        &self,
        profile: &TeacherProfile,
        definitions: &[SpecialFunctionDefinition],
        reference_year: i32,
    ) -> TeacherProfile {
        let mut result = profile.clone();

        // Collapse duplicates, preserving first-seen order.
        let mut seen = Vec::new();
        result.active_special_functions.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(id.clone());
                true
            }
        });

        // 1. Standard-function exclusivity
        let role = result.role;
        result.active_special_functions.retain(|id| {
            match definitions.iter().find(|d| &d.id == id) {
                Some(def) if def.is_standard => def.allowed_roles.permits(role),
                _ => true,
            }
        });

        let expected_standard = definitions
            .iter()
            .find(|d| d.is_standard && d.allowed_roles == AllowedRoles::Only(role));

        if let Some(def) = expected_standard {
            if !result.is_function_active(&def.id) {
                tracing::debug!(
                    function_id = %def.id,
                    role = %result.role,
                    "attaching standard function for role"
                );
                result.active_special_functions.push(def.id.clone());
                result
                    .function_config
                    .entry(def.id.clone())
                    .or_insert_with(|| FunctionConfig::with_hours(def.hours));
            }
        }

        // 2. Age relief
        let age = result.age_at(reference_year);
        let relief_active = age_relief_lessons(age) > 0.0;
        let currently_active = result.is_function_active(function_ids::AGE_RELIEF);

        if relief_active && !currently_active {
            result
                .active_special_functions
                .push(function_ids::AGE_RELIEF.to_string());
        } else if !relief_active && currently_active {
            result
                .active_special_functions
                .retain(|id| id != function_ids::AGE_RELIEF);
        }

        result
    }
}

impl Default for FunctionActivationPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::domain::types::Role;

    const REFERENCE_YEAR: i32 = 2026;

    fn reconcile(profile: &TeacherProfile) -> TeacherProfile {
        FunctionActivationPolicy::new().reconcile(
            profile,
            &defaults::special_functions(),
            REFERENCE_YEAR,
        )
    }

    #[test]
    fn test_role_change_swaps_standard_function() {
        let mut profile = defaults::teacher_profile();
        assert!(profile.is_function_active("sf-klp"));

        profile.role = Role::Flp;
        let reconciled = reconcile(&profile);

        assert!(!reconciled.is_function_active("sf-klp"));
        assert!(reconciled.is_function_active("sf-flp"));
        // Lessons are untouched by reconciliation alone.
        assert_eq!(reconciled.teaching_lessons, profile.teaching_lessons);
    }

    #[test]
    fn test_standard_function_config_seeded_with_default_hours() {
        let mut profile = defaults::teacher_profile();
        profile.role = Role::Shp;
        profile.function_config.remove("sf-shp");

        let reconciled = reconcile(&profile);
        assert_eq!(reconciled.function_config["sf-shp"].hours, 120.0);
    }

    #[test]
    fn test_existing_override_survives_reconciliation() {
        let mut profile = defaults::teacher_profile();
        profile.role = Role::Shp;
        profile
            .function_config
            .get_mut("sf-shp")
            .unwrap()
            .hours = 60.0;

        let reconciled = reconcile(&profile);
        assert_eq!(reconciled.function_config["sf-shp"].hours, 60.0);
    }

    #[test]
    fn test_age_relief_forced_active_at_56() {
        let mut profile = defaults::teacher_profile();
        profile.birth_year = 1970; // age 56
        let reconciled = reconcile(&profile);
        assert!(reconciled.is_function_active("sf-age"));
    }

    #[test]
    fn test_age_relief_removed_below_55() {
        let mut profile = defaults::teacher_profile();
        profile.birth_year = 1985;
        profile
            .active_special_functions
            .push("sf-age".to_string()); // manual attempt
        let reconciled = reconcile(&profile);
        assert!(!reconciled.is_function_active("sf-age"));
    }

    #[test]
    fn test_manual_deactivation_is_overridden() {
        let mut profile = defaults::teacher_profile();
        profile.birth_year = 1970;
        let reconciled = reconcile(&profile);
        assert!(reconciled.is_function_active("sf-age"));

        // User strips the entry; the next pass restores it.
        let mut tampered = reconciled.clone();
        tampered
            .active_special_functions
            .retain(|id| id != "sf-age");
        let restored = reconcile(&tampered);
        assert!(restored.is_function_active("sf-age"));
    }

    #[test]
    fn test_optional_functions_persist() {
        let mut profile = defaults::teacher_profile();
        profile
            .active_special_functions
            .push("sf-picts".to_string());
        profile.role = Role::Flp;

        let reconciled = reconcile(&profile);
        assert!(reconciled.is_function_active("sf-picts"));
    }

    #[test]
    fn test_idempotent() {
        let mut profile = defaults::teacher_profile();
        profile.birth_year = 1965;
        profile.role = Role::Daz;

        let once = reconcile(&profile);
        let twice = reconcile(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_duplicate_entries_collapse() {
        let mut profile = defaults::teacher_profile();
        profile
            .active_special_functions
            .push("sf-klp".to_string()); // stale duplicate
        let reconciled = reconcile(&profile);
        let count = reconciled
            .active_special_functions
            .iter()
            .filter(|id| *id == "sf-klp")
            .count();
        assert_eq!(count, 1);
    }
}
