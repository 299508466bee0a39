//! Authentication primitives and the bundled identity provider.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- session token generation and validation.
//! - [`identity`] -- [`identity::PasswordIdentity`], an
//!   [`IdentityProvider`](slotbook_core::identity::IdentityProvider) backed by
//!   an account store.

pub mod identity;
pub mod jwt;
pub mod password;
