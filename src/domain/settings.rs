// ==========================================
// Pensum Planner - Global Settings
// ==========================================
// Annual-hours baseline and per-role full-time lesson
// counts. Precondition: all values > 0. The engine does
// not guard against a zero or missing base-lesson count;
// a misconfigured catalogue produces inf/NaN that
// propagates visibly into the pensum percentage.
// ==========================================

use crate::domain::types::{Role, WorkField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fraction of base hours booked per work field
/// (Teaching&Class / Learners&Partners / School / Teacher).
/// The four shares sum to exactly 1.0.
pub const DISTRIBUTION_SHARES: [(WorkField, f64); 4] = [
    (WorkField::TeachingAndClass, 0.82),
    (WorkField::LearnersAndPartners, 0.07),
    (WorkField::School, 0.07),
    (WorkField::Teacher, 0.04),
];

/// Administrative baseline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Annual working hours defining the 100% pensum.
    pub annual_hours: f64,
    /// Lesson count that constitutes a full-time load, per role.
    pub base_lessons: BTreeMap<Role, f64>,
}

impl GlobalSettings {
    /// Base lesson count for a role. A role missing from the
    /// configuration yields 0.0, which surfaces as a division
    /// by zero downstream rather than being masked here.
    pub fn base_lessons_for(&self, role: Role) -> f64 {
        self.base_lessons.get(&role).copied().unwrap_or(0.0)
    }

    /// Share of base hours attributed to a work field.
    pub fn share_for(field: WorkField) -> f64 {
        DISTRIBUTION_SHARES
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, s)| *s)
            .unwrap_or(0.0)
    }
}
