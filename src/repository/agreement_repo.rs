// ==========================================
// Pensum Planner - Agreement Repository
// ==========================================
// CRUD for saved agreements and dashboard folders.
// No business logic: the cached scalars are computed by
// the caller (PlannerApi) at save time; this layer only
// stores and retrieves them.
// ==========================================

use crate::domain::agreement::{Folder, SavedAgreement};
use crate::domain::teacher::TeacherProfile;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex, MutexGuard};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const AGREEMENT_COLUMNS: &str = "agreement_id, folder_id, last_modified, profile_json, \
     cached_pensum_percentage, cached_total_hours, cached_total_lessons";

// ==========================================
// AgreementRepository
// ==========================================
pub struct AgreementRepository {
    conn: Arc<Mutex<Connection>>,
}

impl AgreementRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn map_row(row: &Row<'_>) -> SqliteResult<SavedAgreement> {
        let last_modified_str: String = row.get(2)?;
        let last_modified = NaiveDateTime::parse_from_str(&last_modified_str, DATETIME_FORMAT)
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?;
        let profile_json: String = row.get(3)?;
        let profile: TeacherProfile = serde_json::from_str(&profile_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
        })?;
        Ok(SavedAgreement {
            id: row.get(0)?,
            folder_id: row.get(1)?,
            last_modified,
            profile,
            cached_pensum_percentage: row.get(4)?,
            cached_total_hours: row.get(5)?,
            cached_total_lessons: row.get(6)?,
        })
    }

    // ==========================================
    // Agreement CRUD
    // ==========================================

    /// Insert or replace one agreement with its cached scalars.
    pub fn save(&self, agreement: &SavedAgreement) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let profile_json = serde_json::to_string(&agreement.profile)?;
        conn.execute(
            r#"
            INSERT INTO agreements (
                agreement_id, folder_id, last_modified, profile_json,
                cached_pensum_percentage, cached_total_hours, cached_total_lessons
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(agreement_id) DO UPDATE SET
                folder_id = ?2,
                last_modified = ?3,
                profile_json = ?4,
                cached_pensum_percentage = ?5,
                cached_total_hours = ?6,
                cached_total_lessons = ?7
            "#,
            params![
                agreement.id,
                agreement.folder_id,
                agreement.last_modified.format(DATETIME_FORMAT).to_string(),
                profile_json,
                agreement.cached_pensum_percentage,
                agreement.cached_total_hours,
                agreement.cached_total_lessons,
            ],
        )?;
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<SavedAgreement>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM agreements WHERE agreement_id = ?1",
            AGREEMENT_COLUMNS
        );
        let agreement = conn
            .query_row(&sql, params![id], Self::map_row)
            .optional()?;
        Ok(agreement)
    }

    pub fn list_all(&self) -> RepositoryResult<Vec<SavedAgreement>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM agreements ORDER BY last_modified DESC, agreement_id",
            AGREEMENT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let agreements = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(agreements)
    }

    pub fn list_by_folder(&self, folder_id: &str) -> RepositoryResult<Vec<SavedAgreement>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM agreements WHERE folder_id = ?1 ORDER BY last_modified DESC, agreement_id",
            AGREEMENT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let agreements = stmt
            .query_map(params![folder_id], Self::map_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(agreements)
    }

    pub fn move_to_folder(&self, agreement_id: &str, folder_id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "UPDATE agreements SET folder_id = ?2 WHERE agreement_id = ?1",
            params![agreement_id, folder_id],
        )?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Agreement".to_string(),
                id: agreement_id.to_string(),
            });
        }
        Ok(())
    }

    pub fn delete(&self, agreement_id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "DELETE FROM agreements WHERE agreement_id = ?1",
            params![agreement_id],
        )?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Agreement".to_string(),
                id: agreement_id.to_string(),
            });
        }
        Ok(())
    }

    // ==========================================
    // Folder management
    // ==========================================

    pub fn create_folder(&self, folder: &Folder) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO folders (folder_id, name) VALUES (?1, ?2)",
            params![folder.id, folder.name],
        )?;
        Ok(())
    }

    pub fn list_folders(&self) -> RepositoryResult<Vec<Folder>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT folder_id, name FROM folders ORDER BY created_at, folder_id")?;
        let folders = stmt
            .query_map([], |row| {
                Ok(Folder {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(folders)
    }

    /// Delete a folder; contained agreements cascade.
    pub fn delete_folder(&self, folder_id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "DELETE FROM folders WHERE folder_id = ?1",
            params![folder_id],
        )?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Folder".to_string(),
                id: folder_id.to_string(),
            });
        }
        Ok(())
    }
}
