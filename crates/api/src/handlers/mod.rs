pub mod auth;
pub mod home;
pub mod notes;
pub mod slots;
