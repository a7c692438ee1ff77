// ==========================================
// Pensum Planner - Main entry point
// ==========================================

use pensum_planner::app::{get_default_db_path, AppState};
use pensum_planner::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", pensum_planner::APP_NAME);
    tracing::info!("Version: {}", pensum_planner::VERSION);
    tracing::info!("==================================================");

    let db_path = get_default_db_path();
    tracing::info!("Using database: {}", db_path);

    let state = AppState::new(db_path)?;

    // Smoke run: evaluate the default profile once so a bare
    // invocation shows the engine working end to end.
    let profile = state.planner_api.new_profile()?;
    let result = state.planner_api.evaluate(&profile)?;
    tracing::info!(
        pensum_percentage = result.pensum_percentage,
        total_hours = result.total_hours,
        "default profile evaluated"
    );

    Ok(())
}
