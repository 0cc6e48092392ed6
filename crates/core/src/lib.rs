//! Domain types and pure business logic for the Lumeo CRM.
//!
//! This crate is persistence- and transport-agnostic: no sqlx, no axum.
//! The `db` and `api` crates build on the types, constants, and validation
//! functions defined here.

pub mod communications;
pub mod error;
pub mod files;
pub mod finance;
pub mod phases;
pub mod roles;
pub mod types;
