// ==========================================
// Pensum Planner - Report API
// ==========================================
// View model for the printable personnel sheet
// (Pensumsvereinbarung). Per-function hours are
// recomputed through the identical shared routine the
// calculator aggregates with, so each listed line item
// is guaranteed to match what entered the totals.
// ==========================================

use crate::api::error::ApiResult;
use crate::config::ConfigManager;
use crate::domain::calculation::LessonBreakdown;
use crate::domain::function::function_ids;
use crate::domain::teacher::TeacherProfile;
use crate::domain::types::{InputUnit, WorkField};
use crate::engine::relief::{age_relief_lessons, resolve_function_hours, HOURS_PER_RELIEF_LESSON};
use crate::engine::{LessonBreakdownEngine, PensumCalculator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==========================================
// View model
// ==========================================

/// Base/extra/total split of one work field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCategory {
    pub work_field: WorkField,
    pub base_hours: f64,
    pub extra_hours: f64,
    pub total_hours: f64,
}

/// One listed function or custom duty with its resolved hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLineItem {
    pub name: String,
    pub work_field: WorkField,
    pub hours: f64,
    /// Display note, e.g. "56 Jahre" or "Nur 1 Klasse".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Everything the personnel sheet renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensumReport {
    pub last_name: String,
    pub first_name: String,
    pub municipality: String,
    pub role: String,
    pub birth_year: i32,
    pub age: i32,
    pub reference_year: i32,
    pub annual_hours: f64,
    pub pensum_percentage: f64,
    pub total_hours: f64,
    pub categories: Vec<ReportCategory>,
    pub line_items: Vec<ReportLineItem>,
    pub lesson_breakdown: LessonBreakdown,
    pub remarks: String,
}

// ==========================================
// ReportApi
// ==========================================
pub struct ReportApi {
    config: Arc<ConfigManager>,
    calculator: PensumCalculator,
    breakdown_engine: LessonBreakdownEngine,
}

impl ReportApi {
    pub fn new(config: Arc<ConfigManager>) -> Self {
        Self {
            config,
            calculator: PensumCalculator::new(),
            breakdown_engine: LessonBreakdownEngine::new(),
        }
    }

    /// Build the full report view model for one (reconciled) profile.
    pub fn build(&self, profile: &TeacherProfile) -> ApiResult<PensumReport> {
        let settings = self.config.get_global_settings()?;
        let definitions = self.config.get_special_functions()?;
        let reference_year = self.config.get_reference_year()?;
        let age = profile.age_at(reference_year);

        let result = self
            .calculator
            .calculate(profile, &settings, &definitions, reference_year);
        let lesson_breakdown =
            self.breakdown_engine
                .breakdown(profile, &definitions, reference_year);

        // Base vs. extra per category. Base comes from the split the
        // calculator exposes, extra is the accumulated correction.
        let categories = result
            .distribution
            .iter()
            .map(|c| ReportCategory {
                work_field: c.work_field,
                base_hours: result.base_hours_by_field[&c.work_field],
                extra_hours: c.correction,
                total_hours: c.hours,
            })
            .collect();

        // Individual line items, resolved through the same routine
        // the calculator used.
        let mut line_items: Vec<ReportLineItem> = Vec::new();
        for id in &profile.active_special_functions {
            let Some(def) = definitions.iter().find(|d| &d.id == id) else {
                continue;
            };
            if def.id == function_ids::AGE_RELIEF {
                let hours = age_relief_lessons(age) * HOURS_PER_RELIEF_LESSON;
                line_items.push(ReportLineItem {
                    name: def.name.clone(),
                    work_field: def.work_field,
                    hours,
                    note: Some(format!("{} Jahre", age)),
                });
                continue;
            }
            let note = profile
                .function_config
                .get(&def.id)
                .and_then(|c| c.single_class)
                .filter(|single| *single)
                .map(|_| "Nur 1 Klasse".to_string());
            line_items.push(ReportLineItem {
                name: def.name.clone(),
                work_field: def.work_field,
                hours: resolve_function_hours(profile, def),
                note,
            });
        }
        for custom in &profile.custom_functions {
            let hours = match custom.unit {
                InputUnit::Lessons => custom.value * HOURS_PER_RELIEF_LESSON,
                InputUnit::Hours => custom.value,
            };
            line_items.push(ReportLineItem {
                name: custom.name.clone(),
                work_field: custom.work_field,
                hours,
                note: None,
            });
        }

        Ok(PensumReport {
            last_name: profile.last_name.clone(),
            first_name: profile.first_name.clone(),
            municipality: profile.municipality.to_string(),
            role: profile.role.to_string(),
            birth_year: profile.birth_year,
            age,
            reference_year,
            annual_hours: settings.annual_hours,
            pensum_percentage: result.pensum_percentage,
            total_hours: result.total_hours,
            categories,
            line_items,
            lesson_breakdown,
            remarks: profile.remarks.clone(),
        })
    }
}
