//! Entity models and DTOs, one module per table.
//!
//! Entities derive `FromRow` + `Serialize`; create/update DTOs derive
//! `Deserialize`. Wire field names are camelCase to match the API consumers;
//! column mapping stays snake_case.

pub mod budget_item;
pub mod category;
pub mod client;
pub mod client_note;
pub mod communication;
pub mod file;
pub mod project;
pub mod subtask;
pub mod user;
