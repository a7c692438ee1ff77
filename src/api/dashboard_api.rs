// ==========================================
// Pensum Planner - Dashboard API
// ==========================================
// Folder/role-filtered listings and their aggregate
// sums. Listings operate purely on the scalars cached at
// save time; there is no lazy recompute path here.
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::agreement::{Folder, SavedAgreement};
use crate::domain::types::{Municipality, Role};
use crate::repository::AgreementRepository;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

// ==========================================
// View model
// ==========================================

/// One dashboard row, built from cached scalars only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementSummary {
    pub id: String,
    pub folder_id: String,
    pub last_name: String,
    pub first_name: String,
    pub municipality: Municipality,
    pub role: Role,
    pub last_modified: NaiveDateTime,
    pub pensum_percentage: f64,
    pub total_hours: f64,
    pub total_lessons: f64,
}

impl From<&SavedAgreement> for AgreementSummary {
    fn from(a: &SavedAgreement) -> Self {
        Self {
            id: a.id.clone(),
            folder_id: a.folder_id.clone(),
            last_name: a.profile.last_name.clone(),
            first_name: a.profile.first_name.clone(),
            municipality: a.profile.municipality,
            role: a.profile.role,
            last_modified: a.last_modified,
            pensum_percentage: a.cached_pensum_percentage,
            total_hours: a.cached_total_hours,
            total_lessons: a.cached_total_lessons,
        }
    }
}

/// Aggregates over a filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTotals {
    pub record_count: usize,
    /// Sum of pensum percentages (full-time equivalents x 100).
    pub total_pensum_percentage: f64,
    pub total_hours: f64,
    pub total_lessons: f64,
}

// ==========================================
// DashboardApi
// ==========================================
pub struct DashboardApi {
    agreement_repo: Arc<AgreementRepository>,
}

impl DashboardApi {
    pub fn new(agreement_repo: Arc<AgreementRepository>) -> Self {
        Self { agreement_repo }
    }

    pub fn list_folders(&self) -> ApiResult<Vec<Folder>> {
        Ok(self.agreement_repo.list_folders()?)
    }

    /// Listing filtered by folder and/or role.
    pub fn list_agreements(
        &self,
        folder_id: Option<&str>,
        role: Option<Role>,
    ) -> ApiResult<Vec<AgreementSummary>> {
        let agreements = match folder_id {
            Some(folder) => self.agreement_repo.list_by_folder(folder)?,
            None => self.agreement_repo.list_all()?,
        };
        Ok(agreements
            .iter()
            .filter(|a| role.map_or(true, |r| a.profile.role == r))
            .map(AgreementSummary::from)
            .collect())
    }

    /// Aggregate sums over the same filter, cached scalars only.
    pub fn totals(&self, folder_id: Option<&str>, role: Option<Role>) -> ApiResult<DashboardTotals> {
        let rows = self.list_agreements(folder_id, role)?;
        Ok(DashboardTotals {
            record_count: rows.len(),
            total_pensum_percentage: rows.iter().map(|r| r.pensum_percentage).sum(),
            total_hours: rows.iter().map(|r| r.total_hours).sum(),
            total_lessons: rows.iter().map(|r| r.total_lessons).sum(),
        })
    }

    pub fn create_folder(&self, name: &str) -> ApiResult<Folder> {
        let folder = Folder {
            id: format!("f-{}", Uuid::new_v4()),
            name: name.to_string(),
        };
        self.agreement_repo.create_folder(&folder)?;
        tracing::info!(folder_id = %folder.id, name = %folder.name, "folder created");
        Ok(folder)
    }

    /// Delete a folder and every agreement inside it.
    pub fn delete_folder(&self, folder_id: &str) -> ApiResult<()> {
        self.agreement_repo.delete_folder(folder_id)?;
        tracing::info!(folder_id = %folder_id, "folder deleted");
        Ok(())
    }

    pub fn move_agreement(&self, agreement_id: &str, target_folder_id: &str) -> ApiResult<()> {
        self.agreement_repo
            .move_to_folder(agreement_id, target_folder_id)?;
        Ok(())
    }

    pub fn delete_agreement(&self, agreement_id: &str) -> ApiResult<()> {
        self.agreement_repo.delete(agreement_id)?;
        tracing::info!(agreement_id = %agreement_id, "agreement deleted");
        Ok(())
    }
}
