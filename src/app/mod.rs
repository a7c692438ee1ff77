// ==========================================
// Pensum Planner - Application layer
// ==========================================
// Connects the API surfaces to the process entry point.
// ==========================================

pub mod state;

pub use state::{get_default_db_path, AppState};
