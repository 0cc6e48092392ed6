//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod budget_item_repo;
pub mod category_repo;
pub mod client_note_repo;
pub mod client_repo;
pub mod communication_repo;
pub mod dashboard_repo;
pub mod file_repo;
pub mod project_repo;
pub mod subtask_repo;
pub mod user_repo;

pub use budget_item_repo::BudgetItemRepo;
pub use category_repo::CategoryRepo;
pub use client_note_repo::ClientNoteRepo;
pub use client_repo::ClientRepo;
pub use communication_repo::CommunicationRepo;
pub use dashboard_repo::DashboardRepo;
pub use file_repo::FileRepo;
pub use project_repo::ProjectRepo;
pub use subtask_repo::SubtaskRepo;
pub use user_repo::UserRepo;
