// ==========================================
// Pensum Planner - Calculation Output Entities
// ==========================================
// Computed views, never persisted as source of truth.
// CalculationResult (hours view) and LessonBreakdown
// (lesson view) are dual views of the same profile and
// must reconcile; see engine::lesson_breakdown.
// ==========================================

use crate::domain::types::WorkField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// DistributionCategory
// ==========================================
/// Accumulated hours of one work field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionCategory {
    pub work_field: WorkField,
    /// Base + functions + custom duties + manual corrections.
    pub hours: f64,
    /// Everything added on top of the base split (functions,
    /// custom duties and manual corrections combined).
    pub correction: f64,
    /// Only the manual part, kept separate for display.
    pub manual_correction_only: f64,
}

// ==========================================
// CalculationResult
// ==========================================
/// Hours view: the four categories plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The 4 categories in fixed distribution order.
    pub distribution: Vec<DistributionCategory>,
    /// Exact sum of the 4 category hours.
    pub total_hours: f64,
    /// total_hours / annual_hours * 100, unclamped.
    pub pensum_percentage: f64,
    /// Base hours per category before any function or correction,
    /// consumed by the report to show base vs. extra.
    pub base_hours_by_field: BTreeMap<WorkField, f64>,
}

impl CalculationResult {
    pub fn category(&self, field: WorkField) -> &DistributionCategory {
        // Construction seeds all 4 fields, so the lookup cannot miss.
        self.distribution
            .iter()
            .find(|c| c.work_field == field)
            .unwrap_or_else(|| panic!("distribution missing work field {}", field))
    }
}

// ==========================================
// LessonBreakdown
// ==========================================
/// One lesson-denominated line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonItem {
    pub name: String,
    pub lessons: f64,
}

/// Lesson view: teaching lessons plus every lesson-unit relief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonBreakdown {
    pub teaching_lessons: f64,
    pub items: Vec<LessonItem>,
    pub total_lessons: f64,
}
