// ==========================================
// Pensum Planner - Engine Layer
// ==========================================
// Business rules only: no SQL, no I/O, no shared state.
// Every engine is a pure function over its inputs; the
// reference year is always an explicit parameter.
// ==========================================

pub mod activation;
pub mod calculator;
pub mod lesson_breakdown;
pub mod relief;

// Re-export core engines
pub use activation::FunctionActivationPolicy;
pub use calculator::{PensumCalculator, KLP_CLASS_RESPONSIBILITY_HOURS};
pub use lesson_breakdown::LessonBreakdownEngine;
pub use relief::{age_relief_lessons, resolve_function_hours, HOURS_PER_RELIEF_LESSON};
