//! Request authentication and authorization.
//!
//! - [`gate::route_gate`] -- Runs before every app route; redirects or admits.
//! - [`auth::AuthUser`] -- The principal the gate admitted.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod gate;
pub mod rbac;
