// ==========================================
// Pensum Planner - Application state
// ==========================================
// Wires the shared SQLite connection into the config
// manager, the repositories and the API instances.
// ==========================================

use std::sync::{Arc, Mutex};

use anyhow::Context;
use rusqlite::Connection;

use crate::api::{DashboardApi, PlannerApi, ReportApi, SettingsApi};
use crate::config::ConfigManager;
use crate::db;
use crate::repository::AgreementRepository;

/// Application-wide shared state.
///
/// Holds one API instance per surface, all backed by the
/// same SQLite connection.
pub struct AppState {
    /// Database path for diagnostics.
    pub db_path: String,

    /// Editing and calculation surface.
    pub planner_api: Arc<PlannerApi>,

    /// Folder and agreement listings.
    pub dashboard_api: Arc<DashboardApi>,

    /// Global settings and function catalogue.
    pub settings_api: Arc<SettingsApi>,

    /// Printable report view.
    pub report_api: Arc<ReportApi>,
}

impl AppState {
    /// Opens the database, applies the schema and builds
    /// every API instance on the shared connection.
    pub fn new(db_path: String) -> anyhow::Result<Self> {
        tracing::info!(db_path = %db_path, "initializing AppState");

        let conn = db::open_connection(&db_path)
            .with_context(|| format!("cannot open database at {}", db_path))?;
        db::init_schema(&conn).context("cannot apply database schema")?;
        let conn = Arc::new(Mutex::new(conn));

        let config = Arc::new(
            ConfigManager::from_connection(conn.clone())
                .context("cannot create ConfigManager")?,
        );
        let agreement_repo = Arc::new(AgreementRepository::from_connection(conn));

        let planner_api = Arc::new(PlannerApi::new(config.clone(), agreement_repo.clone()));
        let dashboard_api = Arc::new(DashboardApi::new(agreement_repo));
        let settings_api = Arc::new(SettingsApi::new(config.clone()));
        let report_api = Arc::new(ReportApi::new(config));

        tracing::info!("AppState initialized");

        Ok(Self {
            db_path,
            planner_api,
            dashboard_api,
            settings_api,
            report_api,
        })
    }
}

/// Default database location.
///
/// `PENSUM_PLANNER_DB_PATH` overrides everything, otherwise
/// the user data directory is used with a dev-specific
/// subdirectory in debug builds.
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("PENSUM_PLANNER_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    // Fallback if no data dir is available.
    let mut path = PathBuf::from("./pensum_planner.db");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("pensum-planner-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("pensum-planner");
        }

        if let Err(e) = std::fs::create_dir_all(&path) {
            tracing::warn!("cannot create data directory {}: {}", path.display(), e);
            path = PathBuf::from(".");
        }

        path = path.join("pensum_planner.db");
    }

    path.to_string_lossy().to_string()
}
