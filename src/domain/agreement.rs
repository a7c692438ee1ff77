// ==========================================
// Pensum Planner - Saved Agreement & Folder
// ==========================================
// Persistence boundary. The cached scalars are computed
// at save time for list-view performance and must equal
// what a fresh calculation would produce, or dashboard
// aggregations silently drift.
// ==========================================

use crate::domain::teacher::TeacherProfile;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored pensum agreement with its profile snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAgreement {
    pub id: String,
    pub folder_id: String,
    pub last_modified: NaiveDateTime,
    pub profile: TeacherProfile,
    pub cached_pensum_percentage: f64,
    pub cached_total_hours: f64,
    pub cached_total_lessons: f64,
}

/// Dashboard folder grouping agreements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
}
