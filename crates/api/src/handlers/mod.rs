//! Request handlers, one submodule per resource.
//!
//! Handlers parse and validate input, run uniqueness/dependency pre-checks,
//! delegate to the corresponding repository in `lumeo_db`, and wrap results
//! in the standard envelope. Errors map through [`crate::error::AppError`].

pub mod auth;
pub mod budget;
pub mod category;
pub mod client;
pub mod client_note;
pub mod communication;
pub mod dashboard;
pub mod diagnostics;
pub mod files;
pub mod health;
pub mod project;
pub mod subtask;
pub mod users;
