// ==========================================
// Pensum Planner - Domain Layer
// ==========================================
// Entities and closed type enums only.
// No data access, no engine logic.
// ==========================================

pub mod agreement;
pub mod calculation;
pub mod function;
pub mod settings;
pub mod teacher;
pub mod types;

// Re-export core types
pub use agreement::{Folder, SavedAgreement};
pub use calculation::{CalculationResult, DistributionCategory, LessonBreakdown, LessonItem};
pub use function::{function_ids, CustomFunction, FunctionConfig, SpecialFunctionDefinition};
pub use settings::{GlobalSettings, DISTRIBUTION_SHARES};
pub use teacher::TeacherProfile;
pub use types::{AllowedRoles, InputUnit, Municipality, Role, WorkField};
