// ==========================================
// Pensum Planner - Planner API
// ==========================================
// Profile editing surface. Every mutation that touches
// role or birth year runs the activation policy
// synchronously before anything is recalculated; the
// editing UI never reconciles on its own.
//
// Profiles are passed in and returned by value: the
// editing surface owns its draft, this API owns the
// rules applied to it.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::agreement::SavedAgreement;
use crate::domain::calculation::{CalculationResult, LessonBreakdown};
use crate::domain::function::{function_ids, CustomFunction, FunctionConfig};
use crate::domain::teacher::TeacherProfile;
use crate::domain::types::{InputUnit, Role, WorkField};
use crate::engine::relief::HOURS_PER_RELIEF_LESSON;
use crate::engine::{FunctionActivationPolicy, LessonBreakdownEngine, PensumCalculator};
use crate::repository::AgreementRepository;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Parse a free-text hours/lessons entry. Non-numeric input is
/// treated as a cleared field (0.0), never as an error.
pub fn parse_numeric_input(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

// ==========================================
// PlannerApi
// ==========================================
pub struct PlannerApi {
    config: Arc<ConfigManager>,
    agreement_repo: Arc<AgreementRepository>,
    policy: FunctionActivationPolicy,
    calculator: PensumCalculator,
    breakdown_engine: LessonBreakdownEngine,
}

impl PlannerApi {
    pub fn new(config: Arc<ConfigManager>, agreement_repo: Arc<AgreementRepository>) -> Self {
        Self {
            config,
            agreement_repo,
            policy: FunctionActivationPolicy::new(),
            calculator: PensumCalculator::new(),
            breakdown_engine: LessonBreakdownEngine::new(),
        }
    }

    /// Fresh profile for a new agreement, already reconciled.
    pub fn new_profile(&self) -> ApiResult<TeacherProfile> {
        let profile = crate::config::defaults::teacher_profile();
        self.reconcile(&profile)
    }

    /// Load a saved agreement's profile, reconciled against the
    /// current catalogue and reference year.
    pub fn load_profile(&self, agreement_id: &str) -> ApiResult<TeacherProfile> {
        let agreement = self
            .agreement_repo
            .find_by_id(agreement_id)?
            .ok_or_else(|| ApiError::NotFound(format!("agreement {}", agreement_id)))?;
        self.reconcile(&agreement.profile)
    }

    fn reconcile(&self, profile: &TeacherProfile) -> ApiResult<TeacherProfile> {
        let definitions = self.config.get_special_functions()?;
        let reference_year = self.config.get_reference_year()?;
        Ok(self.policy.reconcile(profile, &definitions, reference_year))
    }

    // ==========================================
    // Mutations
    // ==========================================

    /// The explicit role-change action: switches the role, resets
    /// the teaching lessons to the role's full-time count and
    /// reconciles. This is the only path that touches lessons.
    pub fn change_role(&self, profile: &TeacherProfile, role: Role) -> ApiResult<TeacherProfile> {
        let settings = self.config.get_global_settings()?;
        let mut updated = profile.clone();
        updated.role = role;
        updated.teaching_lessons = settings.base_lessons_for(role);
        tracing::info!(role = %role, lessons = updated.teaching_lessons, "role changed");
        self.reconcile(&updated)
    }

    pub fn set_birth_year(&self, profile: &TeacherProfile, year: i32) -> ApiResult<TeacherProfile> {
        let mut updated = profile.clone();
        updated.birth_year = year;
        self.reconcile(&updated)
    }

    pub fn set_teaching_lessons(
        &self,
        profile: &TeacherProfile,
        lessons: f64,
    ) -> ApiResult<TeacherProfile> {
        let mut updated = profile.clone();
        updated.teaching_lessons = lessons;
        Ok(updated)
    }

    /// Toggle an optional catalogue function. Standard functions
    /// and the age relief are managed by the activation policy and
    /// cannot be toggled directly.
    pub fn toggle_function(
        &self,
        profile: &TeacherProfile,
        function_id: &str,
        active: bool,
    ) -> ApiResult<TeacherProfile> {
        let definitions = self.config.get_special_functions()?;
        let def = definitions
            .iter()
            .find(|d| d.id == function_id)
            .ok_or_else(|| ApiError::NotFound(format!("special function {}", function_id)))?;

        if def.is_standard || def.id == function_ids::AGE_RELIEF {
            return Err(ApiError::Validation(format!(
                "function {} is managed automatically and cannot be toggled",
                function_id
            )));
        }
        if active && !def.allowed_roles.permits(profile.role) {
            return Err(ApiError::Validation(format!(
                "function {} is not available for role {}",
                function_id, profile.role
            )));
        }

        let mut updated = profile.clone();
        updated
            .active_special_functions
            .retain(|id| id != function_id);
        if active {
            updated
                .active_special_functions
                .push(function_id.to_string());
        }
        Ok(updated)
    }

    /// Store an hour override for a function. The value arrives in
    /// the given unit and is stored as hours (lessons x 60).
    pub fn set_function_hours(
        &self,
        profile: &TeacherProfile,
        function_id: &str,
        value: f64,
        unit: InputUnit,
    ) -> ApiResult<TeacherProfile> {
        let hours = match unit {
            InputUnit::Lessons => value * HOURS_PER_RELIEF_LESSON,
            InputUnit::Hours => value,
        };
        let mut updated = profile.clone();
        let entry = updated
            .function_config
            .entry(function_id.to_string())
            .or_insert_with(|| FunctionConfig::with_hours(0.0));
        entry.hours = hours;
        Ok(updated)
    }

    /// SHP/DaZ coordination covering only one class: 60h instead
    /// of 120h.
    pub fn set_single_class(
        &self,
        profile: &TeacherProfile,
        function_id: &str,
        single_class: bool,
    ) -> ApiResult<TeacherProfile> {
        if function_id != function_ids::SHP_STANDARD && function_id != function_ids::DAZ_STANDARD {
            return Err(ApiError::Validation(format!(
                "single-class flag does not apply to {}",
                function_id
            )));
        }
        let mut updated = profile.clone();
        updated.function_config.insert(
            function_id.to_string(),
            FunctionConfig {
                hours: if single_class { 60.0 } else { 120.0 },
                single_class: Some(single_class),
            },
        );
        Ok(updated)
    }

    /// Set or clear (None) the manual correction of one work field.
    pub fn set_manual_correction(
        &self,
        profile: &TeacherProfile,
        field: WorkField,
        delta: Option<f64>,
    ) -> ApiResult<TeacherProfile> {
        let mut updated = profile.clone();
        match delta {
            Some(value) => {
                updated.manual_corrections.insert(field, value);
            }
            None => {
                updated.manual_corrections.remove(&field);
            }
        }
        Ok(updated)
    }

    pub fn add_custom_function(&self, profile: &TeacherProfile) -> ApiResult<TeacherProfile> {
        let mut updated = profile.clone();
        updated.custom_functions.push(CustomFunction {
            id: format!("custom-{}", Uuid::new_v4()),
            name: "Neue Aufgabe".to_string(),
            value: 0.0,
            unit: InputUnit::Hours,
            work_field: WorkField::School,
        });
        Ok(updated)
    }

    pub fn update_custom_function(
        &self,
        profile: &TeacherProfile,
        custom: CustomFunction,
    ) -> ApiResult<TeacherProfile> {
        let mut updated = profile.clone();
        let slot = updated
            .custom_functions
            .iter_mut()
            .find(|cf| cf.id == custom.id)
            .ok_or_else(|| ApiError::NotFound(format!("custom function {}", custom.id)))?;
        *slot = custom;
        Ok(updated)
    }

    pub fn remove_custom_function(
        &self,
        profile: &TeacherProfile,
        custom_id: &str,
    ) -> ApiResult<TeacherProfile> {
        let mut updated = profile.clone();
        let before = updated.custom_functions.len();
        updated.custom_functions.retain(|cf| cf.id != custom_id);
        if updated.custom_functions.len() == before {
            return Err(ApiError::NotFound(format!("custom function {}", custom_id)));
        }
        Ok(updated)
    }

    // ==========================================
    // Derivations
    // ==========================================

    /// Recompute the hours view. Called after every edit; the
    /// result is never cached as source of truth.
    pub fn evaluate(&self, profile: &TeacherProfile) -> ApiResult<CalculationResult> {
        let settings = self.config.get_global_settings()?;
        let definitions = self.config.get_special_functions()?;
        let reference_year = self.config.get_reference_year()?;
        Ok(self
            .calculator
            .calculate(profile, &settings, &definitions, reference_year))
    }

    /// Recompute the lesson view.
    pub fn lesson_breakdown(&self, profile: &TeacherProfile) -> ApiResult<LessonBreakdown> {
        let definitions = self.config.get_special_functions()?;
        let reference_year = self.config.get_reference_year()?;
        Ok(self
            .breakdown_engine
            .breakdown(profile, &definitions, reference_year))
    }

    // ==========================================
    // Persistence
    // ==========================================

    /// Save the profile as an agreement. The cached scalars are a
    /// fresh calculation at save time so dashboard listings match
    /// what a recomputation would produce.
    pub fn save(
        &self,
        profile: &TeacherProfile,
        agreement_id: Option<&str>,
        folder_id: &str,
    ) -> ApiResult<SavedAgreement> {
        if profile.last_name.trim().is_empty() {
            return Err(ApiError::Validation(
                "a last name is required before saving".to_string(),
            ));
        }

        let reconciled = self.reconcile(profile)?;
        let result = self.evaluate(&reconciled)?;
        let breakdown = self.lesson_breakdown(&reconciled)?;

        let agreement = SavedAgreement {
            id: agreement_id
                .map(str::to_string)
                .unwrap_or_else(|| format!("a-{}", Uuid::new_v4())),
            folder_id: folder_id.to_string(),
            last_modified: Utc::now().naive_utc(),
            profile: reconciled,
            cached_pensum_percentage: result.pensum_percentage,
            cached_total_hours: result.total_hours,
            cached_total_lessons: breakdown.total_lessons,
        };
        self.agreement_repo.save(&agreement)?;
        tracing::info!(
            agreement_id = %agreement.id,
            pensum = agreement.cached_pensum_percentage,
            "agreement saved"
        );
        Ok(agreement)
    }
}
