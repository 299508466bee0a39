//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts

pub mod account;
pub mod note;
pub mod session;
pub mod slot;
pub mod user;
