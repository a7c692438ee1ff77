// ==========================================
// Pensum Planner - Repository Layer
// ==========================================
// Data access only; no business rules.
// ==========================================

pub mod agreement_repo;
pub mod error;

pub use agreement_repo::AgreementRepository;
pub use error::{RepositoryError, RepositoryResult};
