//! Domain logic for the slot-booking service.
//!
//! Everything here is free of database and HTTP dependencies: error types,
//! roles, the route-gate decision, slot-time normalization, note validation
//! and the identity capability trait.

pub mod access;
pub mod error;
pub mod identity;
pub mod notes;
pub mod roles;
pub mod scheduling;
pub mod types;
