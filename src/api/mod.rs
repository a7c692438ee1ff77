// ==========================================
// Pensum Planner - API layer
// ==========================================
// Business-facing interfaces consumed by the application
// shell. All mutation paths re-run the activation policy
// before handing a profile back out.
// ==========================================

pub mod error;
pub mod planner_api;
pub mod dashboard_api;
pub mod settings_api;
pub mod report_api;

// Re-export core types
pub use error::{ApiError, ApiResult};
pub use planner_api::{parse_numeric_input, PlannerApi};
pub use dashboard_api::{AgreementSummary, DashboardApi, DashboardTotals};
pub use settings_api::SettingsApi;
pub use report_api::{PensumReport, ReportApi, ReportCategory, ReportLineItem};
